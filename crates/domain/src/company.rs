use crate::shared::entity::{Entity, ID};

#[derive(Debug, Clone)]
pub struct Company {
    pub id: ID,
    pub name: String,
}

impl Company {
    pub fn new(name: &str) -> Self {
        Self {
            id: Default::default(),
            name: name.into(),
        }
    }
}

impl Entity for Company {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
