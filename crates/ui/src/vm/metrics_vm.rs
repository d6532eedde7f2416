use mail_core::model::MetricsSnapshot;

/// Renders a percentage with two decimals, e.g. `12.50%`.
///
/// This is the only transformation applied to fetched rate values.
#[must_use]
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.2}%")
}

/// One rate/count pair in the metrics grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricCardVm {
    pub label: &'static str,
    pub rate: String,
    pub detail: String,
}

/// Display form of a full metrics snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricsVm {
    pub cards: Vec<MetricCardVm>,
}

impl From<&MetricsSnapshot> for MetricsVm {
    fn from(snapshot: &MetricsSnapshot) -> Self {
        let entries = [
            ("Open Rate", snapshot.open_rate, snapshot.total_opens, "opens"),
            (
                "Bounce Rate",
                snapshot.bounce_rate,
                snapshot.total_bounces,
                "bounces",
            ),
            (
                "Reply Rate",
                snapshot.reply_rate,
                snapshot.total_replies,
                "replies",
            ),
            (
                "Unsubscribe Rate",
                snapshot.unsubscribe_rate,
                snapshot.total_unsubscribes,
                "unsubscribes",
            ),
        ];
        Self {
            cards: entries
                .into_iter()
                .map(|(label, rate, count, unit)| MetricCardVm {
                    label,
                    rate: format_rate(rate),
                    detail: format!("{count} {unit}"),
                })
                .collect(),
        }
    }
}
