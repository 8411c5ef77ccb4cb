pub mod dijkstra_data;
pub mod frontier;
pub mod vertex_distance_queue;
pub mod vertex_expanded_data;
