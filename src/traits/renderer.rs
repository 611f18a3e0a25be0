/// The drawing capability a presentation layer implements to display a
/// [`Swarm`](crate::algorithms::particles::Swarm).
///
/// The swarm never draws anything itself; [`Swarm::render`](crate::algorithms::particles::Swarm::render)
/// only walks its state and hands positions to the renderer, target first and then every particle
/// in iteration order.
pub trait SwarmRenderer<C> {
    /// Draw the marker for the point of interest.
    fn draw_target(&mut self, point_of_interest: &C);
    /// Draw a particle at its interpolated display position, along with its velocity indicator.
    fn draw_particle(&mut self, display_position: &C, velocity: &C);
}
