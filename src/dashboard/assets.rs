//! Embedded dashboard page
//!
//! One self-contained page, compiled into the binary: no build step, no
//! files on disk. The page pulls `/api/report` and renders a token heatmap
//! and a top-tokens bar chart per method and instance.

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Prism Dashboard</title>
<style>
  :root {
    --bg: #12141a; --panel: #1b1e27; --line: #2a2e3b;
    --text: #e6e8ee; --dim: #8b90a0;
    --pos: 46, 204, 113; --neg: 231, 76, 60; --accent: #5b9cf5;
  }
  * { box-sizing: border-box; }
  body {
    margin: 0; background: var(--bg); color: var(--text);
    font: 15px/1.5 "Segoe UI", system-ui, sans-serif;
  }
  header {
    padding: 18px 28px; border-bottom: 1px solid var(--line);
    display: flex; align-items: baseline; gap: 14px;
  }
  header h1 { margin: 0; font-size: 20px; color: var(--accent); }
  header .meta { color: var(--dim); font-size: 13px; }
  main { max-width: 980px; margin: 0 auto; padding: 20px 28px 60px; }
  .tabs { display: flex; gap: 8px; margin: 14px 0 22px; }
  .tabs button {
    background: var(--panel); color: var(--dim); border: 1px solid var(--line);
    border-radius: 6px; padding: 6px 16px; font-size: 14px; cursor: pointer;
  }
  .tabs button.active { color: var(--text); border-color: var(--accent); }
  .card {
    background: var(--panel); border: 1px solid var(--line); border-radius: 8px;
    padding: 16px 20px; margin-bottom: 18px;
  }
  .card .pred { font-size: 13px; color: var(--dim); margin-bottom: 10px; }
  .card .pred b { color: var(--text); }
  .tokens { line-height: 2.1; margin-bottom: 14px; }
  .tokens span {
    padding: 2px 5px; margin: 0 2px; border-radius: 4px; white-space: nowrap;
  }
  .bars .row { display: flex; align-items: center; gap: 10px; margin: 3px 0; }
  .bars .tok { width: 140px; text-align: right; overflow: hidden;
    text-overflow: ellipsis; white-space: nowrap; color: var(--dim); font-size: 13px; }
  .bars .track { flex: 1; display: flex; height: 14px; }
  .bars .half { flex: 1; position: relative; }
  .bars .fill { position: absolute; top: 0; height: 100%; border-radius: 2px; }
  .bars .neg .fill { right: 0; background: rgb(var(--neg)); }
  .bars .pos .fill { left: 0; background: rgb(var(--pos)); }
  .bars .val { width: 64px; font-size: 12px; color: var(--dim); }
  .empty { color: var(--dim); font-style: italic; }
</style>
</head>
<body>
<header>
  <h1>Prism</h1>
  <span class="meta" id="meta">loading…</span>
</header>
<main>
  <div class="tabs" id="tabs"></div>
  <div id="content"></div>
</main>
<script>
  const TOP_K = 10;

  function tint(score, max) {
    if (max <= 0) return "transparent";
    const alpha = Math.min(Math.abs(score) / max, 1) * 0.65;
    return `rgba(${getComputedStyle(document.body).getPropertyValue(
      score >= 0 ? "--pos" : "--neg")}, ${alpha.toFixed(3)})`;
  }

  function tokenStrip(exp, max) {
    const strip = document.createElement("div");
    strip.className = "tokens";
    exp.tokens.forEach((token, i) => {
      const span = document.createElement("span");
      span.textContent = token;
      span.title = exp.scores[i].toFixed(4);
      span.style.background = tint(exp.scores[i], max);
      strip.appendChild(span);
    });
    return strip;
  }

  function barChart(exp, max) {
    const bars = document.createElement("div");
    bars.className = "bars";
    const ranked = exp.tokens
      .map((token, i) => [token, exp.scores[i]])
      .sort((a, b) => Math.abs(b[1]) - Math.abs(a[1]))
      .slice(0, TOP_K);
    ranked.forEach(([token, score]) => {
      const row = document.createElement("div");
      row.className = "row";
      const width = max > 0 ? (Math.abs(score) / max) * 100 : 0;
      const negFill = score < 0 ? `<div class="fill" style="width:${width}%"></div>` : "";
      const posFill = score >= 0 ? `<div class="fill" style="width:${width}%"></div>` : "";
      row.innerHTML =
        `<div class="tok">${token}</div>` +
        `<div class="track"><div class="half neg">${negFill}</div>` +
        `<div class="half pos">${posFill}</div></div>` +
        `<div class="val">${score >= 0 ? "+" : ""}${score.toFixed(3)}</div>`;
      bars.appendChild(row);
    });
    return bars;
  }

  function card(exp) {
    const div = document.createElement("div");
    div.className = "card";
    const pred = document.createElement("div");
    pred.className = "pred";
    pred.innerHTML = `<b>${exp.label}</b> · ${(exp.confidence * 100).toFixed(1)}%` +
      ` · baseline ${exp.baseline.toFixed(3)}`;
    div.appendChild(pred);
    if (exp.tokens.length === 0) {
      const empty = document.createElement("div");
      empty.className = "empty";
      empty.textContent = "(no tokens)";
      div.appendChild(empty);
      return div;
    }
    const max = Math.max(...exp.scores.map(Math.abs));
    div.appendChild(tokenStrip(exp, max));
    div.appendChild(barChart(exp, max));
    return div;
  }

  function showMethod(report, method) {
    document.querySelectorAll(".tabs button").forEach(b =>
      b.classList.toggle("active", b.dataset.method === method));
    const content = document.getElementById("content");
    content.innerHTML = "";
    report.explanations.methods[method].forEach(exp =>
      content.appendChild(card(exp)));
  }

  fetch("/api/report")
    .then(r => r.json())
    .then(report => {
      document.getElementById("meta").textContent =
        `${report.model_tag} · ${report.inputs.length} instance(s) · ${report.created}`;
      const tabs = document.getElementById("tabs");
      const methods = Object.keys(report.explanations.methods);
      methods.forEach(method => {
        const btn = document.createElement("button");
        btn.textContent = method;
        btn.dataset.method = method;
        btn.onclick = () => showMethod(report, method);
        tabs.appendChild(btn);
      });
      if (methods.length > 0) showMethod(report, methods[0]);
    })
    .catch(e => {
      document.getElementById("meta").textContent = "failed to load report: " + e;
    });
</script>
</body>
</html>
"##;
