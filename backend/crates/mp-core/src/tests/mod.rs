mod models;
mod scoring;
