//! Shared page chrome.

/// Wrap page content in the common document and navigation bar.
pub(super) fn page(title: &str, signed_in: bool, content: &str) -> String {
    let nav = if signed_in {
        r#"<a href="/painel">Painel</a>
    <a href="/logout">Sair</a>"#
    } else {
        r#"<a href="/register">Cadastrar</a>
    <a href="/login">Entrar</a>"#
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR"><head>
<meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/css/style.css">
</head><body>
<nav>
    <a href="/">Início</a>
    {nav}
</nav>
<main class="card">
  {content}
</main>
</body></html>"#
    )
}
