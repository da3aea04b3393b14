// Domain layer: record shapes shared by the katas. Only std/serde here.

pub mod model;
