pub mod module_id;
pub mod module_type;
pub mod raw_idx;
pub mod route_chunk_info;
pub mod route_chunk_name;
