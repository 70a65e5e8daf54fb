use tracing::info;

/// Work metric shared by every strategy: states popped from the frontier and
/// tested for completion.
#[derive(Debug, Default, Clone)]
pub struct Stats {
    pub expand_nodes: usize,
}

impl Stats {
    pub fn print(&self, strategy: &str) {
        info!(
            "{strategy}: expanded nodes number: {:?}",
            self.expand_nodes
        );
    }
}
