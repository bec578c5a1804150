#![allow(dead_code)]

pub mod mocks;

pub const PASSWORD_CHARS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_-+=<>?";

pub fn is_username_char(c: char) -> bool {
    c.is_ascii_lowercase()
}

pub fn is_password_char(c: char) -> bool {
    PASSWORD_CHARS.contains(c)
}
