mod models;
mod prompts;
