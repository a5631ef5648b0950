pub mod mod_record;
pub mod texture;
