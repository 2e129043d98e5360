// HTTP handlers — one module per API resource.

pub mod check;
