mod service;

pub use service::CategoryQueryService;
