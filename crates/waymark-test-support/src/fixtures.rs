//! Sample documents shared across test suites.

/// A three-chapter story with one terminal chapter and one option that
/// points at a chapter that does not exist.
pub const STORY_JSON: &str = r#"{
  "initial-chapter": "intro",
  "chapters": {
    "intro": {
      "title": "The Trailhead",
      "story": [
        "Fog sits low over the valley.",
        "Two paths leave the clearing."
      ],
      "options": [
        { "text": "Take the ridge path", "arc": "ridge" },
        { "text": "Follow the river", "arc": "river" }
      ]
    },
    "ridge": {
      "title": "The Ridge",
      "story": ["Wind tugs at your coat."],
      "options": [
        { "text": "Climb down to the ferry", "arc": "ferry" }
      ]
    },
    "river": {
      "title": "The River",
      "story": ["The current carries you home."],
      "options": []
    }
  }
}"#;

/// The story in [`STORY_JSON`], written as YAML.
pub const STORY_YAML: &str = r#"initial-chapter: intro
chapters:
  intro:
    title: The Trailhead
    story:
      - Fog sits low over the valley.
      - Two paths leave the clearing.
    options:
      - text: Take the ridge path
        arc: ridge
      - text: Follow the river
        arc: river
  ridge:
    title: The Ridge
    story:
      - Wind tugs at your coat.
    options:
      - text: Climb down to the ferry
        arc: ferry
  river:
    title: The River
    story:
      - The current carries you home.
    options: []
"#;

/// A template that renders only the chapter title.
pub const TITLE_TEMPLATE: &str = "{{ title }}";

/// A page template exercising every chapter field.
pub const PAGE_TEMPLATE: &str = r#"<h1>{{ title }}</h1>
{% for paragraph in story %}<p>{{ paragraph }}</p>
{% endfor %}<ul>
{% for option in options %}<li><a href="/stories/{{ option.arc }}">{{ option.text }}</a></li>
{% endfor %}</ul>"#;

/// Two redirect records as YAML.
pub const REDIRECTS_YAML: &str = r"
- path: /trail
  url: https://example.com/trail
- path: /trail-map
  url: https://example.com/trail/map
";

/// The records in [`REDIRECTS_YAML`], written as JSON.
pub const REDIRECTS_JSON: &str = r#"[
  { "path": "/trail", "url": "https://example.com/trail" },
  { "path": "/trail-map", "url": "https://example.com/trail/map" }
]"#;

/// Two quiz problems as CSV.
pub const PROBLEMS_CSV: &str = "2+2,4\ncapital of France,Paris\n";
