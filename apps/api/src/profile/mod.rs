// User-owned state: selected skills, custom skills, completed steps and the
// free-form profile document. The catalog itself is never written here.

pub mod handlers;
pub mod models;
pub mod store;
