pub mod feedback_routes;
