pub mod application {
    pub mod shared {
        pub mod observable;
    }
    pub mod auth {
        pub mod store;
    }
    pub mod cart {
        pub mod store;
    }
    pub mod search {
        pub mod store;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod auth {
        pub mod errors;
        pub mod model;
        pub mod services;
    }
    pub mod cart {
        pub mod model;
    }
    pub mod catalog {
        pub mod model;
        pub mod repository;
    }
    pub mod search {
        pub mod errors;
        pub mod matching;
        pub mod model;
        pub mod recent;
    }
}
