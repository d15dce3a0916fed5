#[macro_use]
extern crate approx;
extern crate nalgebra as na;

mod collision_pipeline;
mod obb_obb_contacts;
mod obb_obb_fuzz;
