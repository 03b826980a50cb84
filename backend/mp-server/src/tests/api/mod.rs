mod error;
mod extractors;
mod proactive;
mod validate;
