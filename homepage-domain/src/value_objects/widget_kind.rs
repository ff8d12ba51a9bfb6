// Widget kind value object

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Projects,
    Streak,
    LastOnline,
}

impl WidgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::Projects => "projects",
            WidgetKind::Streak => "streak",
            WidgetKind::LastOnline => "last_online",
        }
    }
}
