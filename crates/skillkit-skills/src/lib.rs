//! skillkit-skills: Scaffolding, validation, and packaging of skill bundles.
//!
//! A skill bundle is a directory holding a `SKILL.md` manifest plus optional
//! `scripts/`, `references/`, and `assets/` subdirectories.
//!
//! # Manifest format
//!
//! ```markdown
//! ---
//! name: pdf-tools
//! description: Fill, merge, and split PDF files. Use when the
//!   user hands over a PDF and asks for edits.
//! license: MIT
//! ---
//!
//! # Pdf Tools
//!
//! [Markdown body, never parsed]
//! ```
//!
//! Only `name`, `description`, `license`, `allowed-tools`, and `metadata`
//! are accepted as keys; `name` and `description` are required.

pub mod error;
pub mod frontmatter;
pub mod init;
pub mod package;
mod paths;
pub mod templates;
pub mod validate;

pub use error::{InitError, PackageError, ValidationError};
pub use frontmatter::parse_frontmatter;
pub use init::{InitOptions, InitStep, init_skill};
pub use package::{PackageStep, package_skill};
pub use validate::{check_frontmatter, quick_validate, validate_skill};
