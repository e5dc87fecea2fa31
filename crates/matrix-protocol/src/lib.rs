//! matrix-protocol
//!
//! Wire-level encoding/decoding for dense `f64` matrices.
//!
//! This crate is responsible for turning `matrix_core::Matrix` /
//! `Vector` values into bytes and back again.
//!
//! - [`wire_types`]   : header layout and magic word
//! - [`binary_codec`] : gonum-compatible binary blobs (buffers, streams, files)
//! - [`csv_codec`]    : CSV compatibility (for tools / fixtures)

pub mod wire_types;
pub mod binary_codec;
pub mod csv_codec;

pub use wire_types::{Header, Malformed, HEADER_LEN, MAGIC};

pub use binary_codec::{
    CodecError,
    decode_matrix,
    decode_vector,
    encode,
    encode_matrix,
    encode_vector,
    load_matrix,
    load_vector,
    read_header,
    save_matrix,
    save_vector,
};
