#![cfg_attr(docsrs, feature(doc_cfg))]
//#![warn(missing_docs)]

/*!
 # credgen

 Generates a random lowercase username and a random complex password of
 user-chosen lengths.

 ## Core Concepts

- **CharacterSet:** an ordered sequence of distinct characters used as a sampling universe.
  Four are predefined: lowercase letters (26), uppercase letters (26), digits (10) and
  the special symbols `!@#$%^&*()_-+=<>?` (17).
- **Generator:** draws every position of the output independently and uniformly, with
  replacement, from its character set. `UsernameGenerator` uses the lowercase letters,
  `PasswordGenerator` uses all four sets (79 characters).
- **Prompt:** the interactive dialogue used by the `credgen` binary.

 Passwords are sampled uniformly; there is no guarantee that every class of
 characters appears in a given password.

 ## Getting Started

```rust
use credgen::core::generator::{generate_password, generate_username};

fn main() -> Result<(), credgen::GeneratorError> {
    let username = generate_username(6)?;
    let password = generate_password(12)?;

    assert_eq!(username.len(), 6);
    assert!(username.chars().all(|c| c.is_ascii_lowercase()));
    assert_eq!(password.len(), 12);

    Ok(())
}
```

 Negative lengths are rejected:

```rust
use credgen::{core::generator::generate_username, GeneratorError};

assert!(matches!(generate_username(-3), Err(GeneratorError::InvalidLength(-3))));
```

 Inject a seeded generator for reproducible output:

```rust
use credgen::core::generator::{Generator, PasswordGenerator};
use rand::{rngs::StdRng, SeedableRng};

let generator = PasswordGenerator::new();
let a = generator.generate_with(10, &mut StdRng::seed_from_u64(1)).unwrap();
let b = generator.generate_with(10, &mut StdRng::seed_from_u64(1)).unwrap();
assert_eq!(a, b);
```

 ## Command line

```text
$ credgen
Enter desired username length: 6
Enter desired password length: 12
Generated Username: qhzmra
Generated Password: k7$Vd_Lq!2=a
```

 The binary exits with status 1 and prints `error: ...` on stderr when an answer
 is not an integer, input ends early, or a length is negative. Set `RUST_LOG=debug`
 to see generation logs on stderr.

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.
 */

/// Character sets and generators
pub mod core;

/// Error types for generation and input handling
pub mod error;

#[doc(inline)]
pub use error::*;

/// Interactive entry point
pub mod prompt;
