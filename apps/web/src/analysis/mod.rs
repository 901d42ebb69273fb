// Analysis flow: form fields, length guards, and the view-state machine the page renders.
// All network access goes through scoring_client; nothing here talks HTTP directly.

pub mod demo;
pub mod validation;
pub mod view_model;
