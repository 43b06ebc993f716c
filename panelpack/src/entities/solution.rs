use crate::entities::PanelLayout;

/// The result of a packing run: finalized panels in creation order,
/// together with the nominal panel dimensions they were filled against.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Nominal panel width (x-axis) of the trial that produced this solution
    pub panel_width: u64,
    /// Nominal panel height (y-axis)
    pub panel_height: u64,
    /// Panels in the order they were opened and filled
    pub panels: Vec<PanelLayout>,
}

impl Solution {
    pub fn new(panel_width: u64, panel_height: u64, panels: Vec<PanelLayout>) -> Self {
        Solution {
            panel_width,
            panel_height,
            panels,
        }
    }

    pub fn n_panels(&self) -> usize {
        self.panels.len()
    }

    pub fn total_placed_qty(&self) -> usize {
        self.panels.iter().map(|p| p.placed.len()).sum()
    }

    /// Average utilization over all panels, in percent.
    pub fn avg_utilization(&self) -> f32 {
        let utils = self.panels.iter().map(|p| p.utilization());
        utils.sum::<f32>() / self.panels.len() as f32
    }
}
