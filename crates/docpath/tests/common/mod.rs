#![allow(dead_code)]

use docpath::simple_node::{doc, elem, text};
use docpath::{DocNode, SimpleNode};

pub const PRESERVE: (&str, &str) = ("xml:space", "preserve");

/// WordprocessingML-shaped document shared by the resolution and navigation tests.
///
/// ```text
/// w:document/w:body
///   w:p                                  (empty)
///   w:p
///     w:r/w:t                            "First"
///     w:r/w:t[xml:space]                 " and second"
///     w:ins
///       w:del/w:r/w:delText[xml:space]   " that's"
///       w:r/w:t[xml:space]               " right before"
///   w:p[hidden]                          "Third"
///   w:p                                  (empty)
///   w:p/w:ins/w:r/w:t[xml:space]         " and "
///   w:p#paragraph-6[w14:paraId]
///     w:r/w:t                            "Fourth"
///     w:r/w:t[xml:space]                 " and fifth"
/// ```
pub fn word_document() -> SimpleNode {
    let (space, preserve) = PRESERVE;
    let run = |t: &str| elem("w:r").child(elem("w:t").child(text(t)));
    let preserved_run = |t: &str| elem("w:r").child(elem("w:t").attr(space, preserve).child(text(t)));
    doc()
        .child(
            elem("w:document").child(
                elem("w:body")
                    .child(elem("w:p"))
                    .child(
                        elem("w:p")
                            .child(run("First"))
                            .child(preserved_run(" and second"))
                            .child(
                                elem("w:ins")
                                    .child(elem("w:del").child(
                                        elem("w:r").child(elem("w:delText").attr(space, preserve).child(text(" that's"))),
                                    ))
                                    .child(preserved_run(" right before")),
                            ),
                    )
                    .child(elem("w:p").attr("hidden", "hidden").child(text("Third")))
                    .child(elem("w:p"))
                    .child(elem("w:p").child(elem("w:ins").child(preserved_run(" and "))))
                    .child(
                        elem("w:p")
                            .attr("id", "paragraph-6")
                            .attr("w14:paraId", "707BD5C8")
                            .child(run("Fourth"))
                            .child(preserved_run(" and fifth")),
                    ),
            ),
        )
        .build()
}

pub fn texts(nodes: &[SimpleNode]) -> Vec<String> {
    nodes.iter().map(SimpleNode::text_content).collect()
}

/// First `w:t` whose text equals `content`.
pub fn text_run(document: &SimpleNode, content: &str) -> SimpleNode {
    document
        .descendants_named(Some("w:t"))
        .into_iter()
        .find(|t| t.text_content() == content)
        .unwrap_or_else(|| panic!("no w:t with text {content:?}"))
}
