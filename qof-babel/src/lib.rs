//! Multi-format interoperability for quiz question sets
//!
//!     This crate provides a uniform interface for converting between the in-memory
//!     question set model and the textual formats it travels in. The primary format is
//!     the Question Output Format ("QOF"), a line-oriented, @-tag-prefixed mini-language
//!     produced by a text-generation collaborator and consumed by document rendering.
//!
//!     TLDR: For format authors:
//!         - Babel owns the parsing/serialization logic for QOF, since no external
//!           library speaks that format. Structured formats (JSON) are offloaded to
//!           the serde ecosystem instead.
//!         - A format is a pair of adapters between source text and the QuestionSet
//!           model, registered through the Format trait.
//!         - Each format should have import and export unit tested, plus a round trip
//!           where the format is lossless enough to support one.
//!
//! Architecture
//!
//!     The model (./model.rs) is the hub: every format converts to and from QuestionSet,
//!     never to another format directly. The model is a pure data container with no
//!     validation of its own; structural invariants are enforced by the decoders that
//!     build instances, and callers needing semantic validation (say, rejecting an
//!     empty option list) post-validate the returned set.
//!
//!     This is a pure lib, that is, it powers the qof-cli but is shell agnostic: no code
//!     here supposes a shell environment, be it std print, env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── model.rs                # Question / QuestionSet containers
//!     ├── curriculum.rs           # Order-keyed classification override
//!     ├── formats
//!     │   ├── qof
//!     │   │   ├── parser.rs       # Decoder implementation
//!     │   │   ├── serializer.rs   # Encoder implementation
//!     │   │   └── mod.rs
//!     │   └── json
//!     │       └── mod.rs
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs                  # includes the subdirectories below
//!     ├── qof
//!     │   ├── import.rs
//!     │   ├── export.rs
//!     │   └── roundtrip.rs
//!     ├── json
//!     │   └── convert.rs
//!     └── fixtures
//!         └── sample.qof
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need
//!     to include these in the mod.
//!
//! The QOF Format
//!
//!     QOF is machine-written but tolerant of a permissive producer: missing optional
//!     fields take documented defaults and unknown tags are skipped, while malformed
//!     numeric fields are a hard error since nothing hand-writes them. The grammar and
//!     the decoder's state machine live in ./formats/qof/mod.rs.
//!
//! Library Choices
//!
//!     The scope here is the QOF text transformations plus adapters; anything with an
//!     established ecosystem crate is offloaded to it. JSON goes through serde_json and
//!     the model derives serde traits rather than hand-rolling any serialization.
pub mod curriculum;
pub mod error;
pub mod format;
pub mod formats;
pub mod model;
pub mod registry;

pub use curriculum::{CurriculumEntry, CurriculumMap};
pub use error::FormatError;
pub use format::Format;
pub use model::{Question, QuestionSet};
pub use registry::FormatRegistry;
