//! HTML page templates.
//!
//! Pages are raw-string templates filled with `format!`. Every dynamic value
//! goes through [`escape`] before it is interpolated.

mod layout;

use layout::page;

/// Escape text for safe inclusion in HTML content and attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Home page
pub fn home(signed_in: bool) -> String {
    page(
        "Início",
        signed_in,
        r#"<h1>Bem-vindo!</h1>
  <p>Crie uma conta ou entre para acessar o seu painel.</p>"#,
    )
}

/// Registration form
pub fn register(signed_in: bool) -> String {
    page(
        "Cadastro",
        signed_in,
        r#"<h1>Cadastro</h1>
  <form method="POST" action="/register">
    <div class="form-group">
      <label for="username">Usuário</label>
      <input type="text" id="username" name="username" required autocomplete="username">
    </div>
    <div class="form-group">
      <label for="password">Senha</label>
      <input type="password" id="password" name="password" required autocomplete="new-password">
    </div>
    <button type="submit" class="btn">Cadastrar</button>
  </form>
  <p class="link">Já tem conta? <a href="/login">Entrar</a></p>"#,
    )
}

/// Login form
pub fn login(signed_in: bool) -> String {
    page(
        "Login",
        signed_in,
        r#"<h1>Login</h1>
  <form method="POST" action="/login">
    <div class="form-group">
      <label for="username">Usuário</label>
      <input type="text" id="username" name="username" required autocomplete="username">
    </div>
    <div class="form-group">
      <label for="password">Senha</label>
      <input type="password" id="password" name="password" required autocomplete="current-password">
    </div>
    <button type="submit" class="btn">Entrar</button>
  </form>
  <p class="link">Não tem conta? <a href="/register">Cadastre-se</a></p>"#,
    )
}

/// Private panel for a signed-in user
pub fn painel(username: &str) -> String {
    let body = format!(
        r#"<h1>Painel</h1>
  <p>Olá, <strong>{username}</strong>! Você está logado.</p>
  <p><a href="/logout" class="btn">Sair</a></p>"#,
        username = escape(username),
    );
    page("Painel", true, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x" & 'y')</script>"#),
            "&lt;script&gt;alert(&quot;x&quot; &amp; &#x27;y&#x27;)&lt;/script&gt;"
        );
        assert_eq!(escape("alice"), "alice");
    }

    #[test]
    fn test_painel_escapes_username() {
        let html = painel("<b>alice</b>");
        assert!(html.contains("&lt;b&gt;alice&lt;/b&gt;"));
        assert!(!html.contains("<b>alice</b>"));
    }

    #[test]
    fn test_forms_post_to_their_routes() {
        assert!(register(false).contains(r#"action="/register""#));
        assert!(login(false).contains(r#"action="/login""#));
    }

    #[test]
    fn test_navigation_follows_sign_in_state() {
        let anonymous = home(false);
        assert!(anonymous.contains(r#"href="/login""#));
        assert!(!anonymous.contains(r#"href="/logout""#));

        let signed_in = home(true);
        assert!(signed_in.contains(r#"href="/painel""#));
        assert!(signed_in.contains(r#"href="/logout""#));
    }
}
