/// Center the pointer paddle on the pointer.
///
/// `pointer_y` is in client coordinates and `surface_top` is the drawing
/// surface's top offset in the same space. No smoothing or clamping.
pub fn track_pointer(paddle_y: &mut f32, pointer_y: f32, surface_top: f32, paddle_height: f32) {
    *paddle_y = pointer_y - surface_top - paddle_height / 2.0;
}
