//! Global CSS styles for the marketing site.

pub const GLOBAL_STYLES: &str = r#"
:root {
  --cream: #fff8f0;
  --coral: #ff7a59;
  --coral-soft: rgba(255, 122, 89, 0.15);
  --sage: #8fbc8f;
  --ink: #2d2a32;
  --ink-soft: rgba(45, 42, 50, 0.7);
  --card-border: #eadfd2;
  --font-sans: 'Nunito', 'Segoe UI', system-ui, sans-serif;
}

*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }

body {
  background: var(--cream);
  color: var(--ink);
  font-family: var(--font-sans);
  line-height: 1.6;
}

.site-page { max-width: 960px; margin: 0 auto; padding: 3rem 1.5rem 5rem; }
.page-heading { font-size: 2.25rem; font-weight: 900; margin-bottom: 1rem; }
.section-heading { font-size: 1.25rem; font-weight: 800; margin-bottom: 0.5rem; }
.lede { font-size: 1.15rem; color: var(--ink-soft); margin-bottom: 2rem; }
.prose p { margin-bottom: 1rem; max-width: 640px; }

/* === Navigation === */
.site-nav {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 1.5rem;
  background: var(--cream);
  border-bottom: 1px solid var(--card-border);
  position: sticky;
  top: 0;
}
.nav-brand {
  background: none;
  border: none;
  font-family: var(--font-sans);
  font-size: 1.4rem;
  font-weight: 900;
  color: var(--coral);
  cursor: pointer;
}
.nav-links { display: flex; gap: 0.25rem; }
.nav-link {
  background: none;
  border: none;
  font-family: var(--font-sans);
  font-weight: 700;
  color: var(--ink-soft);
  padding: 0.5rem 0.9rem;
  border-radius: 999px;
  cursor: pointer;
}
.nav-link.active { color: var(--coral); background: var(--coral-soft); }
.nav-hamburger { display: none; background: none; border: none; font-size: 1.5rem; cursor: pointer; }

@media (max-width: 768px) {
  .nav-links { display: none; }
  .nav-hamburger { display: block; }
}

.mobile-menu {
  position: fixed;
  inset: 0;
  top: 60px;
  background: var(--cream);
  display: flex;
  flex-direction: column;
  padding: 1.5rem;
  gap: 0.5rem;
  z-index: 10;
}
.mobile-menu-link {
  background: none;
  border: none;
  font-family: var(--font-sans);
  font-size: 1.25rem;
  font-weight: 700;
  text-align: left;
  padding: 0.75rem;
  cursor: pointer;
}

/* === Hero === */
.hero { text-align: center; padding: 4rem 0 3rem; }
.hero-title { font-size: 3rem; font-weight: 900; }
.hero-subtitle { font-size: 1.2rem; color: var(--ink-soft); max-width: 560px; margin: 1rem auto 2rem; }
.hero-actions { display: flex; gap: 0.75rem; justify-content: center; }

.cta-button {
  background: var(--coral);
  color: #fff;
  border: none;
  border-radius: 999px;
  padding: 0.9rem 2.25rem;
  font-family: var(--font-sans);
  font-size: 1.05rem;
  font-weight: 800;
  cursor: pointer;
}
.ghost-button {
  background: none;
  border: none;
  color: var(--ink-soft);
  font-family: var(--font-sans);
  font-weight: 700;
  text-decoration: underline;
  cursor: pointer;
}

/* === Features / stats / stories === */
.feature-row, .stat-row { display: flex; gap: 1.5rem; flex-wrap: wrap; }
.feature, .stat {
  flex: 1;
  min-width: 220px;
  background: #fff;
  border: 1px solid var(--card-border);
  border-radius: 16px;
  padding: 1.5rem;
  text-align: center;
}
.feature-icon { font-size: 2rem; }
.stat-number { display: block; font-size: 2rem; font-weight: 900; color: var(--coral); }
.stat-label { color: var(--ink-soft); }

.story-grid { display: flex; gap: 1.5rem; flex-wrap: wrap; }
.story-card {
  flex: 1;
  min-width: 260px;
  background: #fff;
  border: 1px solid var(--card-border);
  border-radius: 16px;
  padding: 1.5rem;
}
.story-quote { font-style: italic; margin-bottom: 0.75rem; }
.story-name { color: var(--ink-soft); font-size: 0.9rem; }

/* === Newsletter === */
.newsletter-form { display: flex; flex-wrap: wrap; gap: 0.6rem; max-width: 480px; }
.newsletter-input {
  flex: 1;
  min-width: 220px;
  border: 1px solid var(--card-border);
  border-radius: 999px;
  padding: 0.75rem 1.25rem;
  font-family: var(--font-sans);
  font-size: 1rem;
}
.newsletter-submit {
  background: var(--coral);
  color: #fff;
  border: none;
  border-radius: 999px;
  padding: 0.75rem 1.5rem;
  font-family: var(--font-sans);
  font-weight: 800;
  cursor: pointer;
}
.newsletter-submit:disabled { opacity: 0.5; cursor: default; }
.newsletter-notice { width: 100%; color: var(--ink-soft); font-size: 0.9rem; }

/* === Confirmation === */
.newsletter-confirm { display: flex; justify-content: center; padding-top: 5rem; }
.confirm-card { text-align: center; max-width: 420px; }
.confirm-icon { font-size: 3rem; display: block; margin-bottom: 1rem; }

.join-section { margin-top: 1rem; }
"#;
