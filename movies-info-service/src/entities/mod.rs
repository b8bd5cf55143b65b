pub mod movie_info;
