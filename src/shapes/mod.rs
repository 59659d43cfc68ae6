pub mod corner;
