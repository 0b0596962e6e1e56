#[derive(Clone, Copy)]
pub enum Speaker {
    Pet,
    System,
    Error,
}

#[derive(Clone)]
pub struct Message {
    pub speaker: Speaker,
    pub text: String,
}

impl Message {
    pub fn pet(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Pet,
            text: text.into(),
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::System,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Error,
            text: text.into(),
        }
    }
}
