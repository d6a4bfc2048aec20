use glium::{program, Program};
use lazy_static::lazy_static;
use send_wrapper::SendWrapper;

lazy_static! {
    pub static ref FILL_PROGRAM: SendWrapper<Program> = SendWrapper::new(
        glium::program!(
            &**crate::gui::DISPLAY,
            140 => {
                vertex: include_str!("fill.vert"),
                fragment: include_str!("fill.frag"),
                outputs_srgb: false,
            },
        )
        .expect("Failed to compile shader")
    );
}
