//! JSON view of the idea forest handed to JavaScript.

use mm_core::{IdeaId, MindMap};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdeaView {
    pub id: usize,
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub width: f64,
    pub height: f64,
    pub level: u32,
    pub display: bool,
    /// Target ids of the branches leaving this idea.
    pub branches: Vec<usize>,
    pub ideas: Vec<IdeaView>,
}

/// The forest as nested views, roots first.
pub fn forest(map: &MindMap) -> Vec<IdeaView> {
    map.roots().iter().filter_map(|&id| view(map, id)).collect()
}

fn view(map: &MindMap, id: IdeaId) -> Option<IdeaView> {
    let idea = map.get(id)?;
    Some(IdeaView {
        id: id.index(),
        text: idea.text.clone(),
        x: idea.x,
        y: idea.y,
        width: idea.width,
        height: idea.height,
        level: idea.level,
        display: idea.display,
        branches: idea.branches.iter().map(|b| b.to.index()).collect(),
        ideas: map
            .ideas(Some(id))
            .into_iter()
            .filter_map(|child| view(map, child))
            .collect(),
    })
}

pub fn to_json(map: &MindMap) -> serde_json::Result<String> {
    serde_json::to_string(&forest(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mm_core::ApproxMeasure;
    use pretty_assertions::assert_eq;

    #[test]
    fn nests_children_and_lists_branch_targets() {
        let mut map = MindMap::default();
        let topic = map
            .create_idea(None, 200, 200, "Topic", None, &ApproxMeasure)
            .unwrap();
        let first = map
            .create_idea(Some(topic), 100, 100, "First", None, &ApproxMeasure)
            .unwrap();

        let views = forest(&map);
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].branches, vec![first.index()]);
        assert_eq!(views[0].ideas[0].text, "First");
        assert_eq!(views[0].ideas[0].level, 1);

        let json = to_json(&map).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["ideas"][0]["x"], 100);
        assert_eq!(parsed[0]["text"], "Topic");
    }
}
