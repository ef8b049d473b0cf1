//! Global CSS styles for the KindClub app shell.
//!
//! Structure only; visual polish carries no correctness obligation.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --cream: #fff8f0;
  --cream-dark: #f7ecdf;
  --card-border: #eadfd2;

  --coral: #ff7a59;
  --coral-soft: rgba(255, 122, 89, 0.15);

  --sage: #8fbc8f;
  --sage-deep: #5f8f5f;

  --ink: #2d2a32;
  --ink-soft: rgba(45, 42, 50, 0.7);
  --ink-muted: rgba(45, 42, 50, 0.5);

  --danger: #d64550;
  --gold: #e9b44c;

  --font-sans: 'Nunito', 'Segoe UI', system-ui, sans-serif;
  --radius: 16px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--cream);
  color: var(--ink);
  font-family: var(--font-sans);
  line-height: 1.5;
}

main {
  min-height: 100vh;
  padding: 2rem 1.5rem 6rem;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

/* === Typography === */
.page-title { font-size: 1.75rem; font-weight: 800; }
.page-subtitle { color: var(--ink-soft); }
.section-header { font-size: 1rem; font-weight: 700; color: var(--ink-soft); }
.brand-title { font-size: 3rem; font-weight: 900; color: var(--coral); }
.tagline { color: var(--ink-soft); font-style: italic; }

/* === Buttons === */
.btn-primary, .btn-secondary, .btn-cta, .btn-ghost {
  font-family: var(--font-sans);
  font-weight: 700;
  border-radius: 999px;
  cursor: pointer;
  transition: transform var(--transition-fast), opacity var(--transition-fast);
}
.btn-primary {
  background: var(--coral);
  color: #fff;
  border: none;
  padding: 0.75rem 1.5rem;
}
.btn-secondary {
  background: transparent;
  color: var(--coral);
  border: 2px solid var(--coral);
  padding: 0.65rem 1.4rem;
}
.btn-cta {
  background: var(--coral);
  color: #fff;
  border: none;
  padding: 1rem 2.5rem;
  font-size: 1.1rem;
}
.btn-ghost {
  background: none;
  border: none;
  color: var(--ink-soft);
  padding: 0.5rem 1rem;
  text-decoration: underline;
}
.btn-primary:hover:not(:disabled),
.btn-cta:hover:not(:disabled) { transform: translateY(-1px); }
button:disabled { opacity: 0.5; cursor: default; }
.btn--done { background: var(--sage-deep); }

.icon-btn {
  background: none;
  border: none;
  cursor: pointer;
  font-size: 1.25rem;
  color: var(--coral);
}

/* === Forms === */
.form-field { display: flex; flex-direction: column; gap: 0.35rem; }
.input-label { font-size: 0.85rem; font-weight: 700; color: var(--ink-soft); }
.input-field {
  background: #fff;
  border: 1px solid var(--card-border);
  border-radius: var(--radius);
  padding: 0.75rem 1rem;
  font-family: var(--font-sans);
  font-size: 1rem;
  color: var(--ink);
}
.input-field:focus {
  outline: none;
  border-color: var(--coral);
  box-shadow: 0 0 0 3px var(--coral-soft);
}
.auth-form { display: flex; flex-direction: column; gap: 1rem; max-width: 360px; }
.form-error { color: var(--danger); font-size: 0.9rem; }
.page-notice { color: var(--sage-deep); font-size: 0.9rem; }
.empty-state { color: var(--ink-muted); text-align: center; padding: 2rem 0; }

/* === Landing === */
.landing { justify-content: center; align-items: center; text-align: center; }
.landing-glow {
  position: fixed;
  inset: 0;
  background: radial-gradient(circle at 50% 20%, var(--coral-soft), transparent 60%);
  pointer-events: none;
}
.landing-actions { display: flex; flex-direction: column; gap: 0.75rem; }

/* === Loading === */
.loading-screen { justify-content: center; align-items: center; }
.loading-heart {
  color: var(--coral);
  font-size: 3rem;
  animation: pulse 1.2s ease-in-out infinite;
}
.loading-text { color: var(--ink-muted); }
@keyframes pulse {
  0%, 100% { transform: scale(1); }
  50% { transform: scale(1.15); }
}

/* === Onboarding === */
.onboarding-header { display: flex; justify-content: center; }
.step-progress { display: flex; gap: 0.5rem; }
.step-dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--card-border);
  transition: background var(--transition-normal);
}
.step-dot--filled { background: var(--coral); }
.step {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  align-items: center;
  text-align: center;
  flex: 1;
  justify-content: center;
}
.step-title { font-size: 1.6rem; font-weight: 800; }
.step-body { color: var(--ink-soft); max-width: 320px; }
.step-hint { color: var(--ink-muted); font-size: 0.85rem; }

.pill-grid { display: flex; flex-wrap: wrap; gap: 0.6rem; justify-content: center; }
.pill {
  background: #fff;
  border: 1px solid var(--card-border);
  border-radius: 999px;
  padding: 0.5rem 1.1rem;
  font-family: var(--font-sans);
  cursor: pointer;
  transition: all var(--transition-fast);
}
.pill--selected, .pill.selected {
  background: var(--coral);
  border-color: var(--coral);
  color: #fff;
}
.choice-list { display: flex; flex-direction: column; gap: 0.6rem; width: 100%; max-width: 320px; }
.choice {
  background: #fff;
  border: 1px solid var(--card-border);
  border-radius: var(--radius);
  padding: 0.9rem 1.25rem;
  font-family: var(--font-sans);
  font-size: 1rem;
  cursor: pointer;
  transition: all var(--transition-fast);
}
.choice.selected { border-color: var(--coral); background: var(--coral-soft); }

/* === Hold to commit === */
.hold-button-wrap { display: flex; flex-direction: column; gap: 0.75rem; align-items: center; }
.hold-button {
  background: var(--coral);
  color: #fff;
  border: none;
  border-radius: 999px;
  padding: 1.1rem 2.75rem;
  font-family: var(--font-sans);
  font-size: 1.1rem;
  font-weight: 800;
  cursor: pointer;
  user-select: none;
  touch-action: none;
}
.hold-button--holding { transform: scale(0.97); }
.hold-button--fired { background: var(--sage-deep); }
.fill-bar {
  width: 220px;
  height: 8px;
  border-radius: 999px;
  background: var(--card-border);
  overflow: hidden;
}
.fill-bar__fill {
  height: 100%;
  background: var(--sage);
  transition: width 40ms linear;
}

/* === Home / cards === */
.home-header { display: flex; justify-content: space-between; align-items: center; }
.streak-badge {
  background: var(--coral-soft);
  border-radius: 999px;
  padding: 0.35rem 0.9rem;
  font-weight: 700;
  font-size: 0.9rem;
}
.content-card {
  background: #fff;
  border: 1px solid var(--card-border);
  border-radius: var(--radius);
  padding: 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
  position: relative;
}
.card-kicker {
  font-size: 0.75rem;
  font-weight: 800;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--coral);
}
.card-title { font-size: 1.2rem; font-weight: 800; }
.card-body { color: var(--ink-soft); }
.card-meta { color: var(--ink-muted); font-size: 0.85rem; }
.card-actions { display: flex; align-items: center; gap: 0.75rem; }
.card-save { position: absolute; top: 0.9rem; right: 0.9rem; }
.quote-text { font-size: 1.15rem; font-style: italic; }
.quote-author { color: var(--ink-muted); font-size: 0.9rem; }

/* === Collection === */
.collection-section { display: flex; flex-direction: column; gap: 0.5rem; }
.collection-list { list-style: none; display: flex; flex-direction: column; gap: 0.5rem; }
.collection-item {
  background: #fff;
  border: 1px solid var(--card-border);
  border-radius: var(--radius);
  padding: 0.85rem 1.1rem;
}

/* === Health === */
.goal-list { list-style: none; display: flex; flex-direction: column; gap: 0.5rem; }
.goal-item {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  background: #fff;
  border: 1px solid var(--card-border);
  border-radius: var(--radius);
  padding: 0.75rem 1rem;
}
.goal-item--done .goal-title { text-decoration: line-through; color: var(--ink-muted); }
.goal-toggle {
  background: none;
  border: none;
  font-size: 1.2rem;
  color: var(--sage-deep);
  cursor: pointer;
}
.goal-add { display: flex; gap: 0.6rem; align-items: flex-end; }

/* === Settings === */
.settings-section { display: flex; flex-direction: column; gap: 0.75rem; }
.settings-row { display: flex; align-items: center; justify-content: space-between; gap: 0.75rem; }
.settings-label { font-weight: 700; }
.toggle {
  border: 2px solid var(--card-border);
  background: #fff;
  border-radius: 999px;
  padding: 0.35rem 1.1rem;
  font-weight: 700;
  cursor: pointer;
}
.toggle--on { background: var(--sage); border-color: var(--sage); color: #fff; }
.interest-chips { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.chip {
  background: var(--cream-dark);
  border-radius: 999px;
  padding: 0.3rem 0.9rem;
  font-size: 0.85rem;
}

/* === Tab bar === */
.tab-bar {
  position: fixed;
  bottom: 0;
  left: 0;
  right: 0;
  display: flex;
  justify-content: space-around;
  background: #fff;
  border-top: 1px solid var(--card-border);
  padding: 0.5rem 0 0.75rem;
}
.tab-bar-item {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.15rem;
  background: none;
  border: none;
  color: var(--ink-muted);
  font-family: var(--font-sans);
  font-size: 0.7rem;
  cursor: pointer;
}
.tab-bar-item.active { color: var(--coral); }
"#;
