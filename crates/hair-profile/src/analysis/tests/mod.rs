mod classifier;
mod common;
mod maintenance;
mod recommendations;
