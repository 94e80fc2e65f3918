/// Panel types that render query results and therefore need at least one target.
///
/// The set is closed and matched case-sensitively against the panel's `type`
/// tag. Anything not listed here (`text`, `row`, `news`, plugin panels, ...)
/// is never required to carry targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryPanelType {
    Timeseries,
    Stat,
    Gauge,
    BarGauge,
    Table,
    Heatmap,
    PieChart,
    /// Pre-7.0 graph panel
    Graph,
    /// Pre-7.0 single value panel
    SingleStat,
}

impl QueryPanelType {
    pub const ALL: [QueryPanelType; 9] = [
        Self::Timeseries,
        Self::Stat,
        Self::Gauge,
        Self::BarGauge,
        Self::Table,
        Self::Heatmap,
        Self::PieChart,
        Self::Graph,
        Self::SingleStat,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Timeseries => "timeseries",
            Self::Stat => "stat",
            Self::Gauge => "gauge",
            Self::BarGauge => "bargauge",
            Self::Table => "table",
            Self::Heatmap => "heatmap",
            Self::PieChart => "piechart",
            Self::Graph => "graph",
            Self::SingleStat => "singlestat",
        }
    }
}

/// Check if a panel type tag requires query targets
pub fn is_query_panel(panel_type: &str) -> bool {
    QueryPanelType::from_tag(panel_type).is_some()
}
