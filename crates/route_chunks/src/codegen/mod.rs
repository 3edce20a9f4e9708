mod extract_chunk;
mod omit_chunked_exports;

pub use self::{extract_chunk::extract_chunk, omit_chunked_exports::omit_chunked_exports};
