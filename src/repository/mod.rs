pub mod auto_repo;

pub use auto_repo::AutoRepository;
