pub mod fixture;
pub mod repository;
pub mod producer {
    pub mod entity;
}
pub mod product {
    pub mod entity;
}
