pub mod clash_output;
pub mod emitter;
