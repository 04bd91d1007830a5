pub mod api_route;
pub mod generate_route;
pub mod index_route;
