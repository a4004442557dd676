pub mod slugs;
