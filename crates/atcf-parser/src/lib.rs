//! ATCF A-deck parser for GEFS ensemble tracks.
//!
//! NHC's ATCF "aid" files hold every model guidance line for a storm. This
//! crate keeps only the GEFS tropical ensemble (`AEMN`, `AC00`, `AP01`..)
//! for the most recent cycle and groups it into per-member tracks.

pub mod cycle;
pub mod decode;
pub mod ensemble;
pub mod error;
pub mod member;
pub mod record;

pub use cycle::Cycle;
pub use decode::decode_adeck_payload;
pub use ensemble::parse_ensemble_tracks;
pub use error::{AtcfError, Result};
pub use member::{compare_model_ids, EnsembleMember};
pub use record::{ModelTrack, ParseResult, TrackRecord};
