pub mod split_route_modules;
