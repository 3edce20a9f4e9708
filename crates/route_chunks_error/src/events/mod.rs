pub mod unsplittable_route_exports;
