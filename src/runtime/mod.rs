pub mod observability;
