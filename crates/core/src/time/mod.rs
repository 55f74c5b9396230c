pub mod relative_age;
