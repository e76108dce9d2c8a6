mod event;
pub(crate) mod view;

pub(crate) use event::ContentIntent;

/// Content area next to the sidebar.
///
/// The left offset only changes through [`ContentIntent::SetOffset`], which
/// the sidebar router sends after every mode change.
#[derive(Debug)]
pub(crate) struct ContentWidget {
    offset: f32,
    title: String,
}

impl ContentWidget {
    pub(crate) fn new(offset: f32, title: String) -> Self {
        Self { offset, title }
    }

    pub(crate) fn reduce(&mut self, event: ContentIntent) {
        match event {
            ContentIntent::SetOffset(offset) => {
                self.offset = offset.max(0.0);
            },
            ContentIntent::ShowItem(title) => {
                self.title = title;
            },
        }
    }

    pub(crate) fn offset(&self) -> f32 {
        self.offset
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }
}
