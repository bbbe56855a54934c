// Property tests harness
mod bindings {
    include!("bindings.rs");
}
