//! Embedded demo page.
//!
//! Element ids match `synext_core::page`: input `text`, regions `out-text`
//! and `out-text-baseline`. The script mirrors `AnnotateService`: the query
//! is percent-encoded, errors are shown instead of swallowed, and a response
//! only lands if no newer request has already written the regions.

/// The page served at `/`.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Syntax extractor</title>
<style>
  body { font-family: sans-serif; margin: 2em auto; max-width: 60em; }
  #text { width: 100%; font-size: 1.1em; padding: 0.3em; }
  .regions { display: flex; gap: 2em; margin-top: 1em; }
  .regions section { flex: 1; }
  .region { min-height: 6em; border: 1px solid #ccc; padding: 0.5em; }
  #status { color: #a00; min-height: 1.2em; }
</style>
</head>
<body>
<h1>Syntax extractor</h1>
<p>Mark the target word with asterisks, e.g. <code>John *likes* Mary</code>,
or tick sentence mode to look up whole sentences.</p>
<input id="text" type="text" value="John *likes* Mary">
<p>
  <label><input id="sentence" type="checkbox"> sentence mode</label>
  <button id="annotate" type="button">Annotate</button>
</p>
<div id="status"></div>
<div class="regions">
  <section><h2>Syntax</h2><div id="out-text" class="region"></div></section>
  <section><h2>Baseline</h2><div id="out-text-baseline" class="region"></div></section>
</div>
<script>
(function () {
  let issued = 0;
  let applied = 0;

  async function annotate() {
    const ticket = ++issued;
    const text = document.getElementById("text").value;
    const sentence = document.getElementById("sentence").checked;
    const status = document.getElementById("status");

    let url = "/api/annotate?text=" + encodeURIComponent(text);
    if (sentence) {
      url += "&sentence_based=1";
    }

    try {
      const response = await fetch(url);
      const body = await response.json();
      if (!response.ok) {
        throw new Error(body.error || ("HTTP " + response.status));
      }
      if (ticket < applied) {
        return;
      }
      applied = ticket;
      document.getElementById("out-text").innerHTML = body.syntax;
      document.getElementById("out-text-baseline").innerHTML = body.baseline;
      status.textContent = "";
    } catch (err) {
      status.textContent = "Annotation failed: " + err.message;
    }
  }

  document.getElementById("annotate").addEventListener("click", annotate);
  document.getElementById("text").addEventListener("keydown", function (event) {
    if (event.key === "Enter") {
      annotate();
    }
  });
})();
</script>
</body>
</html>
"#;
