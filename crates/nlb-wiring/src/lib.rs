//! # nlb-wiring — Two-Copy Wirings of Non-Local Boxes
//!
//! A wiring combines two copies of a box into one through six local
//! processing functions, three for Alice (`f_1`, `f_2`, `f_3`) and three for
//! Bob (`g_1`, `g_2`, `g_3`). This crate packs those functions into the
//! 32-entry vector an external optimizer searches over, and recovers
//! readable boolean formulas from the optimizer's results.
//!
//! ## Key Design Principles
//!
//! 1. **Two wiring types.** [`RelaxedWiring`] holds real entries for
//!    gradient search; [`ExtremalWiring`] holds bits and is the only thing the
//!    decoder accepts directly. Rounding is an explicit, total conversion.
//!
//! 2. **One layout.** Block offsets and bit order live in [`layout`];
//!    encoding, decoding and evaluation all go through `pack`/`unpack`
//!    instead of per-function code paths.
//!
//! 3. **Generic ANF.** Formula recovery is the Möbius transform over any
//!    arity, see [`anf`].
//!
//! 4. **No output side effects.** Decoding returns [`DecodedWiring`]; the
//!    caller prints it if it wants to.
//!
//! ## Crate Policy
//!
//! - Depends only on `nlb-core` internally.
//! - Randomness comes from a caller-supplied `rand::Rng`.
//! - Emits `tracing` events; never installs a subscriber.

pub mod anf;
pub mod catalog;
pub mod codec;
pub mod families;
pub mod layout;
pub mod random;
pub mod table;
pub mod wiring;

pub use anf::{AnfExpression, AnfTerm};
pub use catalog::{known_collapsing_wirings, KNOWN_COLLAPSING_WIRINGS};
pub use codec::{decode_wiring, encode_wiring, explain_relaxed, DecodeMode, DecodeOptions, DecodedWiring};
pub use families::WiringFamily;
pub use layout::{ProcessingFunction, WIRING_LEN};
pub use random::{random_extremal_wiring, random_wiring};
pub use table::{FunctionTable, WiringFunctions};
pub use wiring::{ExtremalWiring, ExtremalWiringBatch, RelaxedWiring, RelaxedWiringBatch};
