//! Global CSS styles for the Mosjid Al Fahad site.
//!
//! Emerald-and-gold palette over warm stone neutrals. Class names
//! match the components one-to-one; custom properties mirror
//! [`super::colors`].

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* EMERALD (Primary, Worship) */
  --emerald-deep: #064e3b;
  --emerald: #065f46;
  --emerald-soft: #059669;
  --emerald-tint: #d1fae5;

  /* GOLD (Accents, Donations) */
  --gold: #d97706;
  --gold-bright: #f59e0b;
  --gold-tint: #fef3c7;

  /* STONE (Surfaces) */
  --cream: #fafaf9;
  --sand: #f5f5f4;
  --ink: #1c1917;

  /* TEXT */
  --text-strong: #292524;
  --text-body: #57534e;
  --text-faint: #a8a29e;
  --text-on-dark: rgba(255, 255, 255, 0.92);

  /* SEMANTIC */
  --danger: #dc2626;
  --success: #16a34a;

  /* Typography */
  --font-display: 'Playfair Display', Georgia, serif;
  --font-body: 'Inter', 'Segoe UI', Helvetica, sans-serif;

  /* Sizes */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-hero: 3.5rem;

  /* Chrome */
  --nav-height: 76px;
  --radius-card: 24px;
  --radius-pill: 999px;
  --shadow-card: 0 10px 30px rgba(28, 25, 23, 0.08);
  --shadow-pop: 0 24px 60px rgba(28, 25, 23, 0.25);
}

/* === Global Reset === */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  background: var(--cream);
  color: var(--text-strong);
  font-family: var(--font-body);
  font-size: var(--text-base);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

img {
  display: block;
  max-width: 100%;
}

button {
  font-family: inherit;
}

a {
  color: inherit;
  text-decoration: none;
}

ul {
  list-style: none;
}

/* === Typography === */
h1, h2, h3, h4 {
  font-family: var(--font-display);
  line-height: 1.2;
  color: var(--emerald-deep);
}

.section-title {
  font-size: var(--text-2xl);
  margin-bottom: 0.75rem;
}

.section-title.on-dark {
  color: var(--text-on-dark);
}

.section-kicker {
  display: inline-block;
  color: var(--gold);
  font-size: var(--text-sm);
  font-weight: 700;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  margin-bottom: 0.5rem;
}

.section-subtitle {
  color: var(--text-body);
  max-width: 560px;
  margin: 0 auto 1.5rem;
}

.gold-bar {
  width: 72px;
  height: 4px;
  margin: 0.75rem auto 0;
  border-radius: var(--radius-pill);
  background: linear-gradient(90deg, var(--gold), var(--gold-bright));
}

/* === Section Scaffolding === */
.page {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.section-inner {
  max-width: 1180px;
  margin: 0 auto;
  padding: 5rem 1.5rem;
}

.section-head {
  margin-bottom: 2.5rem;
}

.section-head.centered {
  text-align: center;
}

.section-head.split {
  display: flex;
  align-items: flex-end;
  justify-content: space-between;
  gap: 1rem;
}

/* === Buttons === */
.gold-button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.75rem 1.5rem;
  background: linear-gradient(135deg, var(--gold), var(--gold-bright));
  border: none;
  border-radius: 16px;
  color: #ffffff;
  font-size: var(--text-base);
  font-weight: 700;
  cursor: pointer;
  box-shadow: 0 8px 20px rgba(217, 119, 6, 0.35);
  transition: all 0.2s ease;
}

.gold-button:hover {
  transform: translateY(-2px);
  box-shadow: 0 12px 26px rgba(217, 119, 6, 0.45);
}

.gold-button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
  transform: none;
}

.gold-button.large {
  padding: 1rem 2rem;
  font-size: var(--text-lg);
}

.gold-button.small {
  padding: 0.5rem 1rem;
  font-size: var(--text-sm);
}

.gold-button.wide {
  width: 100%;
}

.gold-button.tall {
  padding: 1.1rem 1.5rem;
  font-size: var(--text-lg);
}

.gold-button.grow {
  flex: 1;
}

.glass-button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 1rem 2rem;
  background: rgba(255, 255, 255, 0.12);
  border: 1px solid rgba(255, 255, 255, 0.35);
  border-radius: 16px;
  backdrop-filter: blur(8px);
  color: #ffffff;
  font-size: var(--text-lg);
  font-weight: 700;
  cursor: pointer;
  transition: all 0.2s ease;
}

.glass-button:hover {
  background: rgba(255, 255, 255, 0.22);
  transform: translateY(-2px);
}

.ghost-button {
  padding: 0.75rem 1.5rem;
  background: transparent;
  border: 2px solid var(--sand);
  border-radius: 16px;
  color: var(--text-body);
  font-size: var(--text-base);
  font-weight: 600;
  cursor: pointer;
  transition: all 0.2s ease;
}

.ghost-button:hover {
  border-color: var(--text-faint);
  color: var(--text-strong);
}

.outline-button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  min-width: 7.5rem;
  padding: 0.65rem 1.25rem;
  background: transparent;
  border: 2px solid var(--emerald);
  border-radius: 14px;
  color: var(--emerald);
  font-size: var(--text-sm);
  font-weight: 700;
  cursor: pointer;
  transition: all 0.2s ease;
}

.outline-button:hover {
  background: var(--emerald);
  color: #ffffff;
}

.outline-button:disabled {
  opacity: 0.7;
  cursor: wait;
}

.text-button {
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
  background: transparent;
  border: none;
  color: var(--emerald);
  font-size: var(--text-base);
  font-weight: 700;
  cursor: pointer;
  transition: color 0.2s ease;
}

.text-button:hover {
  color: var(--gold);
}

.text-button.underlined {
  border-bottom: 2px solid var(--gold);
  padding-bottom: 0.25rem;
}

/* === Navigation Header === */
.site-nav {
  position: sticky;
  top: 0;
  z-index: 200;
  background: rgba(250, 250, 249, 0.92);
  backdrop-filter: blur(10px);
  border-bottom: 1px solid rgba(28, 25, 23, 0.06);
}

.nav-inner {
  max-width: 1180px;
  margin: 0 auto;
  height: var(--nav-height);
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.nav-brand {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  color: var(--emerald);
}

.brand-text {
  display: flex;
  flex-direction: column;
  line-height: 1.15;
}

.brand-name {
  font-family: var(--font-display);
  font-size: var(--text-lg);
  font-weight: 700;
  color: var(--emerald-deep);
}

.brand-name.on-dark {
  color: var(--text-on-dark);
}

.brand-sub {
  font-size: 0.7rem;
  font-weight: 600;
  letter-spacing: 0.25em;
  text-transform: uppercase;
  color: var(--text-faint);
}

.brand-sub.gold {
  color: var(--gold-bright);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 1.25rem;
}

.nav-link {
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--text-body);
  transition: color 0.2s ease;
}

.nav-link:hover {
  color: var(--emerald);
}

.nav-icon-button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 38px;
  height: 38px;
  background: transparent;
  border: none;
  border-radius: 50%;
  color: var(--text-body);
  cursor: pointer;
  transition: all 0.2s ease;
}

.nav-icon-button:hover {
  background: var(--sand);
  color: var(--emerald);
}

.nav-clock {
  display: flex;
  flex-direction: column;
  align-items: flex-end;
  line-height: 1.2;
  padding: 0 0.75rem;
  border-left: 1px solid rgba(28, 25, 23, 0.1);
}

.nav-clock-label {
  font-size: 0.65rem;
  font-weight: 700;
  letter-spacing: 0.15em;
  text-transform: uppercase;
  color: var(--text-faint);
}

.nav-clock-time {
  font-weight: 700;
  color: var(--emerald-deep);
  font-variant-numeric: tabular-nums;
}

.nav-clock-seconds {
  margin-left: 0.3rem;
  font-size: 0.7rem;
  color: var(--gold);
  font-variant-numeric: tabular-nums;
}

.nav-donate-button {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.55rem 1.1rem;
  background: linear-gradient(135deg, var(--gold), var(--gold-bright));
  border-radius: var(--radius-pill);
  color: #ffffff;
  font-size: var(--text-sm);
  font-weight: 700;
  box-shadow: 0 6px 16px rgba(217, 119, 6, 0.35);
  transition: all 0.2s ease;
}

.nav-donate-button:hover {
  transform: translateY(-1px);
  box-shadow: 0 10px 20px rgba(217, 119, 6, 0.45);
}

.nav-donate-button.wide {
  width: 100%;
  justify-content: center;
  padding: 0.8rem 1.1rem;
}

.nav-menu-button {
  display: none;
  align-items: center;
  justify-content: center;
  width: 42px;
  height: 42px;
  background: transparent;
  border: none;
  border-radius: 10px;
  color: var(--emerald-deep);
  cursor: pointer;
}

.nav-menu-button:hover {
  background: var(--sand);
}

/* === Mobile Menu === */
.mobile-menu {
  display: none;
  flex-direction: column;
  gap: 0.25rem;
  padding: 0.75rem 1.5rem 1.25rem;
  background: var(--cream);
  border-bottom: 1px solid rgba(28, 25, 23, 0.08);
}

.mobile-link {
  padding: 0.65rem 0.5rem;
  border-radius: 10px;
  font-weight: 600;
  color: var(--text-body);
}

.mobile-link:hover {
  background: var(--sand);
  color: var(--emerald);
}

/* === Hero === */
.hero {
  position: relative;
  min-height: calc(100vh - var(--nav-height));
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
}

.hero-backdrop {
  position: absolute;
  inset: 0;
}

.hero-backdrop img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.hero-overlay {
  position: absolute;
  inset: 0;
  background: linear-gradient(180deg, rgba(6, 78, 59, 0.55), rgba(6, 78, 59, 0.75));
}

.hero-content {
  position: relative;
  z-index: 1;
  text-align: center;
  padding: 2rem;
}

.hero-title {
  font-size: var(--text-hero);
  color: #ffffff;
  text-shadow: 0 4px 24px rgba(6, 78, 59, 0.6);
  margin-bottom: 1rem;
}

.hero-tagline {
  font-family: var(--font-display);
  font-style: italic;
  font-size: var(--text-xl);
  color: var(--gold-tint);
  margin-bottom: 2.5rem;
}

.hero-actions {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  flex-wrap: wrap;
}

.hero-scroll-cue {
  position: absolute;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
  z-index: 1;
}

.scroll-mouse {
  width: 26px;
  height: 42px;
  border: 2px solid rgba(255, 255, 255, 0.7);
  border-radius: var(--radius-pill);
  display: flex;
  justify-content: center;
  padding-top: 8px;
}

.scroll-wheel {
  width: 4px;
  height: 8px;
  border-radius: var(--radius-pill);
  background: rgba(255, 255, 255, 0.9);
  animation: scroll-cue 1.6s ease-in-out infinite;
}

@keyframes scroll-cue {
  0% { transform: translateY(0); opacity: 1; }
  70% { transform: translateY(12px); opacity: 0; }
  100% { transform: translateY(0); opacity: 0; }
}

/* === Prayer Times Section === */
.prayer-section {
  background: #ffffff;
}

.live-chip {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.35rem 1rem;
  margin-bottom: 1rem;
  background: var(--emerald-tint);
  border-radius: var(--radius-pill);
  color: var(--emerald);
  font-size: var(--text-sm);
  font-weight: 700;
}

.live-dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--emerald-soft);
  animation: pulse 1.5s ease-in-out infinite;
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.35; }
}

/* === Next Prayer Banner === */
.next-prayer-banner {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 2rem;
  max-width: 560px;
  margin: 0 auto 2rem;
  padding: 1.5rem 2rem;
  background: linear-gradient(135deg, var(--emerald-deep), var(--emerald));
  border-radius: var(--radius-card);
  box-shadow: 0 16px 40px rgba(6, 78, 59, 0.35);
  color: var(--text-on-dark);
}

.next-prayer-who {
  display: flex;
  align-items: center;
  gap: 1rem;
  text-align: left;
}

.next-prayer-clock {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 58px;
  height: 58px;
  background: rgba(255, 255, 255, 0.12);
  border-radius: 18px;
  color: var(--gold-bright);
}

.next-prayer-label {
  font-size: 0.7rem;
  font-weight: 700;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: rgba(255, 255, 255, 0.6);
}

.next-prayer-name {
  font-size: var(--text-xl);
  color: #ffffff;
}

.next-prayer-divider {
  width: 1px;
  align-self: stretch;
  background: rgba(255, 255, 255, 0.2);
}

.next-prayer-when {
  text-align: left;
}

.next-prayer-countdown {
  font-size: var(--text-xl);
  font-weight: 700;
  color: var(--gold-bright);
  font-variant-numeric: tabular-nums;
}

/* === Edit Toolbar === */
.edit-toolbar {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  margin-bottom: 2rem;
}

.edit-button {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.55rem 1.2rem;
  background: #ffffff;
  border: 2px solid var(--emerald-tint);
  border-radius: var(--radius-pill);
  color: var(--emerald);
  font-size: var(--text-sm);
  font-weight: 700;
  cursor: pointer;
  transition: all 0.2s ease;
}

.edit-button:hover {
  border-color: var(--emerald-soft);
}

.edit-button.solid {
  background: var(--emerald);
  border-color: var(--emerald);
  color: #ffffff;
}

.edit-button.solid:hover {
  background: var(--emerald-deep);
}

.edit-button.muted {
  color: var(--text-body);
  border-color: var(--sand);
}

/* === Prayer Cards === */
.prayer-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 1.25rem;
}

.prayer-card {
  position: relative;
  background: #ffffff;
  border: 2px solid transparent;
  border-radius: var(--radius-card);
  padding: 1.5rem;
  text-align: center;
  box-shadow: var(--shadow-card);
  cursor: pointer;
  transition: all 0.25s ease;
}

.prayer-card:hover {
  transform: translateY(-4px);
  border-color: var(--gold-tint);
}

.prayer-card.next {
  background: linear-gradient(160deg, var(--emerald), var(--emerald-deep));
  border-color: var(--gold-bright);
}

.prayer-card.next .prayer-name,
.prayer-card.next .prayer-time {
  color: #ffffff;
}

.prayer-card.next .prayer-icon-chip {
  background: rgba(255, 255, 255, 0.15);
  color: var(--gold-bright);
}

.prayer-card.jummah {
  border-color: var(--gold-tint);
  background: #fffbeb;
}

.prayer-ping {
  position: absolute;
  top: 0.9rem;
  right: 0.9rem;
  width: 10px;
  height: 10px;
  border-radius: 50%;
  background: var(--gold-bright);
  animation: ping 1.2s ease-out infinite;
}

@keyframes ping {
  0% { box-shadow: 0 0 0 0 rgba(245, 158, 11, 0.7); }
  100% { box-shadow: 0 0 0 12px rgba(245, 158, 11, 0); }
}

.prayer-icon-chip {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 48px;
  height: 48px;
  margin-bottom: 0.75rem;
  background: var(--emerald-tint);
  border-radius: 16px;
  color: var(--emerald);
}

.prayer-name {
  font-size: var(--text-lg);
  margin-bottom: 0.25rem;
}

.prayer-time {
  font-weight: 700;
  color: var(--gold);
  font-variant-numeric: tabular-nums;
}

.prayer-time-input {
  width: 100%;
  padding: 0.4rem 0.5rem;
  border: 2px solid var(--gold-tint);
  border-radius: 10px;
  font-family: inherit;
  font-size: var(--text-sm);
  font-weight: 700;
  text-align: center;
  color: var(--text-strong);
}

.prayer-time-input:focus {
  outline: none;
  border-color: var(--gold-bright);
}

.prayer-next-tag {
  margin-top: 0.5rem;
  font-size: 0.7rem;
  font-weight: 700;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--gold-bright);
}

/* === About Section === */
.about-section {
  background: var(--cream);
}

.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 4rem;
  align-items: center;
}

.about-photo-frame {
  position: relative;
  padding: 1rem;
}

.frame-corner {
  position: absolute;
  width: 72px;
  height: 72px;
  border: 4px solid var(--gold-bright);
}

.frame-corner.top-left {
  top: 0;
  left: 0;
  border-right: none;
  border-bottom: none;
  border-top-left-radius: 24px;
}

.frame-corner.bottom-right {
  bottom: 0;
  right: 0;
  border-left: none;
  border-top: none;
  border-bottom-right-radius: 24px;
}

.about-photo {
  width: 100%;
  border-radius: var(--radius-card);
  box-shadow: var(--shadow-card);
}

.about-copy .markdown-content {
  margin-bottom: 1.5rem;
}

.about-actions {
  display: flex;
  align-items: center;
  gap: 1.5rem;
  flex-wrap: wrap;
}

/* === Services Section === */
.services-section {
  background: linear-gradient(160deg, var(--emerald-deep), var(--emerald));
}

.services-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
}

.service-card {
  display: flex;
  flex-direction: column;
  background: rgba(255, 255, 255, 0.06);
  border: 1px solid rgba(255, 255, 255, 0.12);
  border-radius: var(--radius-card);
  padding: 2rem;
  transition: all 0.25s ease;
}

.service-card:hover {
  background: rgba(255, 255, 255, 0.1);
  transform: translateY(-4px);
}

.service-icon-chip {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 56px;
  height: 56px;
  margin-bottom: 1.25rem;
  background: linear-gradient(135deg, var(--gold), var(--gold-bright));
  border-radius: 18px;
  color: #ffffff;
  box-shadow: 0 8px 20px rgba(217, 119, 6, 0.35);
}

.service-icon-chip.tilted {
  transform: rotate(-6deg);
}

.service-title {
  font-size: var(--text-lg);
  color: var(--text-on-dark);
  margin-bottom: 0.5rem;
}

.service-blurb {
  flex: 1;
  font-size: var(--text-sm);
  color: rgba(255, 255, 255, 0.7);
  margin-bottom: 1.25rem;
}

.service-more {
  display: inline-flex;
  align-items: center;
  gap: 0.3rem;
  align-self: flex-start;
  background: transparent;
  border: none;
  color: var(--gold-bright);
  font-size: var(--text-sm);
  font-weight: 700;
  cursor: pointer;
  transition: gap 0.2s ease;
}

.service-more:hover {
  gap: 0.55rem;
}

/* === Events Section === */
.events-section {
  background: var(--cream);
}

.events-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
}

.event-card {
  display: flex;
  flex-direction: column;
  background: #ffffff;
  border: 1px solid rgba(28, 25, 23, 0.06);
  border-radius: var(--radius-card);
  padding: 1.75rem;
  box-shadow: var(--shadow-card);
  transition: transform 0.25s ease;
}

.event-card:hover {
  transform: translateY(-4px);
}

.event-date {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  align-self: flex-start;
  padding: 0.3rem 0.85rem;
  margin-bottom: 1rem;
  background: var(--gold-tint);
  border-radius: var(--radius-pill);
  color: var(--gold);
  font-size: var(--text-sm);
  font-weight: 700;
}

.event-date.on-image {
  background: rgba(254, 243, 199, 0.9);
  margin-bottom: 0.5rem;
}

.event-title {
  font-size: var(--text-lg);
  margin-bottom: 0.5rem;
}

.event-blurb {
  flex: 1;
  font-size: var(--text-sm);
  color: var(--text-body);
  margin-bottom: 1.25rem;
}

.event-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  flex-wrap: wrap;
}

.registered-note {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.5rem 0.9rem;
  background: var(--emerald-tint);
  border-radius: 12px;
  color: var(--success);
  font-size: var(--text-sm);
  font-weight: 700;
}

.registered-note.grow {
  flex: 1;
  justify-content: center;
  padding: 0.85rem;
}

.event-details-box {
  background: var(--sand);
  border-left: 4px solid var(--gold-bright);
  border-radius: 12px;
  padding: 1.25rem 1.5rem;
  margin-bottom: 1.5rem;
}

/* === Gallery Section === */
.gallery-section {
  background: var(--sand);
}

.gallery-filters {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.6rem;
  flex-wrap: wrap;
  margin-bottom: 2.5rem;
}

.filter-pill {
  padding: 0.5rem 1.3rem;
  background: #ffffff;
  border: 2px solid transparent;
  border-radius: var(--radius-pill);
  color: var(--text-body);
  font-size: var(--text-sm);
  font-weight: 700;
  cursor: pointer;
  transition: all 0.2s ease;
}

.filter-pill:hover {
  border-color: var(--emerald-tint);
  color: var(--emerald);
}

.filter-pill.active {
  background: var(--emerald);
  color: #ffffff;
}

.gallery-columns {
  columns: 3;
  column-gap: 1.25rem;
}

.gallery-tile {
  position: relative;
  margin-bottom: 1.25rem;
  border-radius: var(--radius-card);
  overflow: hidden;
  cursor: pointer;
  break-inside: avoid;
}

.gallery-tile img {
  width: 100%;
  transition: transform 0.4s ease;
}

.gallery-tile:hover img {
  transform: scale(1.05);
}

.gallery-tile-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  padding: 1.25rem;
  background: linear-gradient(180deg, transparent 40%, rgba(6, 78, 59, 0.85));
  opacity: 0;
  transition: opacity 0.3s ease;
}

.gallery-tile:hover .gallery-tile-overlay {
  opacity: 1;
}

.tile-category {
  font-size: 0.7rem;
  font-weight: 700;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--gold-bright);
}

.tile-title {
  color: #ffffff;
  font-size: var(--text-lg);
}

/* === Donation CTA Banner === */
.donate-cta {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1.5rem;
  margin-top: 3rem;
  padding: 1.75rem 2rem;
  background: #ffffff;
  border: 1px solid var(--gold-tint);
  border-radius: var(--radius-card);
  box-shadow: var(--shadow-card);
}

.donate-cta.on-dark {
  background: rgba(255, 255, 255, 0.08);
  border-color: rgba(255, 255, 255, 0.18);
}

.donate-cta-copy {
  flex: 1;
  min-width: 0;
}

.donate-cta-title {
  font-size: var(--text-lg);
  margin-bottom: 0.25rem;
}

.donate-cta.on-dark .donate-cta-title {
  color: var(--text-on-dark);
}

.donate-cta-text {
  font-size: var(--text-sm);
  color: var(--text-body);
}

.donate-cta.on-dark .donate-cta-text {
  color: rgba(255, 255, 255, 0.7);
}

/* === Modal Overlay === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(28, 25, 23, 0.6);
  backdrop-filter: blur(4px);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 1.5rem;
}

.modal-close {
  position: absolute;
  top: 1rem;
  right: 1rem;
  display: flex;
  align-items: center;
  justify-content: center;
  width: 38px;
  height: 38px;
  background: rgba(255, 255, 255, 0.2);
  border: none;
  border-radius: 50%;
  color: #ffffff;
  cursor: pointer;
  transition: background 0.2s ease;
  z-index: 2;
}

.modal-close:hover {
  background: rgba(255, 255, 255, 0.35);
}

.modal-close.floating {
  position: fixed;
  top: 1.5rem;
  right: 1.5rem;
}

.modal-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

/* === Prayer Modal === */
.prayer-modal {
  width: 100%;
  max-width: 420px;
  background: #ffffff;
  border-radius: var(--radius-card);
  overflow: hidden;
  box-shadow: var(--shadow-pop);
  animation: pop-in 0.25s ease;
}

.prayer-modal-head {
  position: relative;
  padding: 2.5rem 2rem 2rem;
  text-align: center;
  background: linear-gradient(135deg, var(--gold), var(--gold-bright));
  color: #ffffff;
}

.prayer-modal-icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 80px;
  height: 80px;
  margin-bottom: 1rem;
  background: rgba(255, 255, 255, 0.2);
  border-radius: 24px;
}

.prayer-modal-kicker {
  font-size: var(--text-sm);
  font-weight: 700;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: rgba(255, 255, 255, 0.85);
}

.prayer-modal-time {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  font-weight: 700;
  font-variant-numeric: tabular-nums;
}

.prayer-modal-body {
  padding: 2rem;
  text-align: center;
}

.prayer-modal-text {
  color: var(--text-body);
  margin-bottom: 1.5rem;
}

/* === Detail Modal (services, events) === */
.detail-modal {
  width: 100%;
  max-width: 640px;
  max-height: 90vh;
  overflow-y: auto;
  background: #ffffff;
  border-radius: var(--radius-card);
  box-shadow: var(--shadow-pop);
  animation: pop-in 0.25s ease;
}

.detail-modal-media {
  position: relative;
  height: 240px;
  overflow: hidden;
  border-radius: var(--radius-card) var(--radius-card) 0 0;
}

.detail-modal-media img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.detail-modal-scrim {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: flex-end;
  padding: 1.5rem;
  background: linear-gradient(180deg, rgba(6, 78, 59, 0.1), rgba(6, 78, 59, 0.8));
}

.detail-modal-heading {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.detail-modal-heading.stacked {
  flex-direction: column;
  align-items: flex-start;
  gap: 0.25rem;
}

.detail-modal-title {
  color: #ffffff;
  font-size: var(--text-xl);
}

.detail-modal-body {
  padding: 2rem;
}

.detail-modal-text {
  color: var(--text-body);
  margin-bottom: 1.5rem;
}

@keyframes pop-in {
  from { transform: scale(0.92); opacity: 0; }
  to { transform: scale(1); opacity: 1; }
}

/* === Lightbox === */
.lightbox-overlay {
  position: fixed;
  inset: 0;
  background: rgba(10, 9, 8, 0.92);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1100;
  padding: 2.5rem;
}

.lightbox-content {
  max-width: 860px;
  width: 100%;
}

.lightbox-image {
  width: 100%;
  max-height: 70vh;
  object-fit: contain;
  border-radius: 16px;
}

.lightbox-caption {
  text-align: center;
  margin-top: 1.25rem;
}

.lightbox-title {
  color: #ffffff;
  font-size: var(--text-xl);
}

/* === Search Overlay === */
.search-overlay {
  position: fixed;
  inset: 0;
  background: rgba(250, 250, 249, 0.97);
  backdrop-filter: blur(6px);
  z-index: 1200;
  overflow-y: auto;
}

.search-panel {
  max-width: 680px;
  margin: 0 auto;
  padding: 4rem 1.5rem;
}

.search-head {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 2rem;
}

.search-heading {
  font-size: var(--text-2xl);
}

.search-close {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 46px;
  height: 46px;
  background: var(--sand);
  border: none;
  border-radius: 50%;
  color: var(--text-strong);
  cursor: pointer;
  transition: all 0.2s ease;
}

.search-close:hover {
  background: var(--emerald);
  color: #ffffff;
}

.search-input-wrap {
  position: relative;
  margin-bottom: 2rem;
}

.search-input-icon {
  position: absolute;
  left: 1.25rem;
  top: 50%;
  transform: translateY(-50%);
  color: var(--text-faint);
}

.search-input {
  width: 100%;
  padding: 1.25rem 1.25rem 1.25rem 3.5rem;
  background: #ffffff;
  border: 2px solid var(--sand);
  border-radius: 20px;
  font-family: inherit;
  font-size: var(--text-lg);
  color: var(--text-strong);
  transition: border-color 0.2s ease;
}

.search-input:focus {
  outline: none;
  border-color: var(--gold-bright);
}

.search-results {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.search-hit {
  display: block;
  padding: 1.25rem 1.5rem;
  background: #ffffff;
  border: 1px solid rgba(28, 25, 23, 0.06);
  border-radius: 18px;
  box-shadow: var(--shadow-card);
  transition: all 0.2s ease;
}

.search-hit:hover {
  border-color: var(--gold-tint);
  transform: translateX(4px);
}

.search-hit-head {
  display: flex;
  align-items: center;
  justify-content: space-between;
  color: var(--text-faint);
}

.search-hit-kind {
  font-size: 0.7rem;
  font-weight: 700;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--gold);
}

.search-hit-title {
  font-size: var(--text-lg);
  margin: 0.25rem 0;
}

.search-hit-snippet {
  font-size: var(--text-sm);
  color: var(--text-body);
}

.search-empty {
  text-align: center;
  padding: 2rem 0;
  color: var(--text-faint);
}

/* === Toast === */
.toast {
  position: fixed;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  align-items: center;
  gap: 1rem;
  max-width: 440px;
  width: calc(100% - 3rem);
  padding: 1.1rem 1.35rem;
  background: var(--emerald-deep);
  border: 1px solid rgba(245, 158, 11, 0.4);
  border-radius: 20px;
  box-shadow: var(--shadow-pop);
  color: var(--text-on-dark);
  z-index: 1300;
  animation: toast-rise 0.3s ease;
}

@keyframes toast-rise {
  from { transform: translate(-50%, 1.5rem); opacity: 0; }
  to { transform: translate(-50%, 0); opacity: 1; }
}

.toast-icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 44px;
  height: 44px;
  background: linear-gradient(135deg, var(--gold), var(--gold-bright));
  border-radius: 14px;
  color: #ffffff;
  flex-shrink: 0;
}

.toast-body {
  flex: 1;
}

.toast-title {
  font-weight: 700;
  color: #ffffff;
}

.toast-text {
  font-size: var(--text-sm);
  color: rgba(255, 255, 255, 0.75);
}

.toast-highlight {
  color: var(--gold-bright);
  font-weight: 700;
}

.toast-actions {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.toast-close-button {
  padding: 0.45rem 0.9rem;
  background: rgba(255, 255, 255, 0.12);
  border: none;
  border-radius: 10px;
  color: #ffffff;
  font-size: var(--text-sm);
  font-weight: 600;
  cursor: pointer;
  transition: background 0.2s ease;
}

.toast-close-button:hover {
  background: rgba(255, 255, 255, 0.22);
}

.toast-dismiss {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 32px;
  height: 32px;
  background: transparent;
  border: none;
  border-radius: 50%;
  color: rgba(255, 255, 255, 0.6);
  cursor: pointer;
  transition: all 0.2s ease;
}

.toast-dismiss:hover {
  background: rgba(255, 255, 255, 0.12);
  color: #ffffff;
}

/* === Footer === */
.site-footer {
  margin-top: auto;
  background: var(--emerald-deep);
  color: var(--text-on-dark);
}

.footer-grid {
  max-width: 1180px;
  margin: 0 auto;
  padding: 4rem 1.5rem 3rem;
  display: grid;
  grid-template-columns: 1.4fr 0.8fr 1fr 1.2fr;
  gap: 2.5rem;
}

.footer-column {
  min-width: 0;
}

.footer-brand-row {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1.25rem;
  color: var(--gold-bright);
}

.footer-blurb {
  font-size: var(--text-sm);
  color: rgba(255, 255, 255, 0.65);
  margin-bottom: 1.5rem;
}

.footer-social {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  margin-bottom: 1.5rem;
}

.social-button {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  background: rgba(255, 255, 255, 0.08);
  border: none;
  border-radius: 12px;
  color: rgba(255, 255, 255, 0.8);
  cursor: pointer;
  transition: all 0.2s ease;
}

.social-button:hover {
  background: var(--gold);
  color: #ffffff;
  transform: translateY(-2px);
}

.footer-heading {
  color: #ffffff;
  font-size: var(--text-lg);
  margin-bottom: 1.25rem;
}

.footer-links {
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
}

.footer-links a {
  font-size: var(--text-sm);
  color: rgba(255, 255, 255, 0.65);
  transition: color 0.2s ease;
}

.footer-links a:hover {
  color: var(--gold-bright);
}

.footer-contact {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.footer-contact li {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  font-size: var(--text-sm);
  color: rgba(255, 255, 255, 0.65);
}

.footer-contact li svg {
  flex-shrink: 0;
  color: var(--gold-bright);
}

.footer-bottom {
  border-top: 1px solid rgba(255, 255, 255, 0.1);
  padding: 1.5rem;
  text-align: center;
  font-size: var(--text-sm);
  color: rgba(255, 255, 255, 0.45);
}

/* === Contact Form === */
.contact-form {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.contact-input {
  width: 100%;
  padding: 0.75rem 1rem;
  background: rgba(255, 255, 255, 0.08);
  border: 1px solid rgba(255, 255, 255, 0.15);
  border-radius: 12px;
  font-family: inherit;
  font-size: var(--text-sm);
  color: #ffffff;
  transition: border-color 0.2s ease;
  resize: vertical;
}

.contact-input::placeholder {
  color: rgba(255, 255, 255, 0.45);
}

.contact-input:focus {
  outline: none;
  border-color: var(--gold-bright);
}

.contact-success {
  padding: 1.5rem;
  background: rgba(255, 255, 255, 0.08);
  border: 1px solid rgba(245, 158, 11, 0.4);
  border-radius: 16px;
  text-align: center;
}

.contact-success-icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 48px;
  height: 48px;
  margin-bottom: 0.75rem;
  background: var(--success);
  border-radius: 50%;
  color: #ffffff;
}

.contact-success-title {
  font-weight: 700;
  color: #ffffff;
}

.contact-success-text {
  font-size: var(--text-sm);
  color: rgba(255, 255, 255, 0.7);
}

/* === Scroll Top === */
.scroll-top {
  position: fixed;
  bottom: 2rem;
  right: 2rem;
  display: flex;
  align-items: center;
  justify-content: center;
  width: 48px;
  height: 48px;
  background: var(--emerald);
  border-radius: 16px;
  color: #ffffff;
  box-shadow: 0 10px 24px rgba(6, 95, 70, 0.4);
  z-index: 150;
  transition: all 0.2s ease;
}

.scroll-top:hover {
  background: var(--emerald-deep);
  transform: translateY(-3px);
}

/* === Donation Page === */
.donate-page {
  min-height: 100vh;
  background: var(--cream);
}

.donate-inner {
  max-width: 1000px;
  margin: 0 auto;
  padding: 3rem 1.5rem;
}

.back-link {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 2.5rem;
  color: var(--emerald);
  font-weight: 700;
  transition: color 0.2s ease;
}

.back-link:hover {
  color: var(--gold);
}

.donate-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
  align-items: start;
}

.donate-pitch {
  padding-top: 1rem;
}

.donate-title {
  font-size: var(--text-hero);
  margin-bottom: 1.25rem;
}

.donate-lead {
  color: var(--text-body);
  font-size: var(--text-lg);
  margin-bottom: 2rem;
}

.donate-points {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.donate-point {
  display: flex;
  align-items: flex-start;
  gap: 1rem;
  padding: 1.5rem;
  background: #ffffff;
  border: 1px solid var(--gold-tint);
  border-radius: var(--radius-card);
  box-shadow: var(--shadow-card);
}

.donate-point-icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 48px;
  height: 48px;
  background: var(--gold-tint);
  border-radius: 16px;
  color: var(--gold);
  flex-shrink: 0;
}

.donate-point-title {
  font-size: var(--text-base);
  margin-bottom: 0.15rem;
}

.donate-point-text {
  font-size: var(--text-sm);
  color: var(--text-body);
}

.donate-card {
  display: flex;
  flex-direction: column;
  gap: 2rem;
  padding: 2.5rem;
  background: #ffffff;
  border: 1px solid var(--gold-tint);
  border-radius: var(--radius-card);
  box-shadow: var(--shadow-pop);
}

.donate-label {
  display: block;
  margin-bottom: 1rem;
  font-size: var(--text-sm);
  font-weight: 700;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--emerald-deep);
}

.amount-presets {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 0.75rem;
  margin-bottom: 1rem;
}

.amount-preset {
  padding: 1rem;
  background: transparent;
  border: 2px solid var(--sand);
  border-radius: 16px;
  color: var(--emerald);
  font-size: var(--text-base);
  font-weight: 700;
  cursor: pointer;
  transition: all 0.2s ease;
}

.amount-preset:hover {
  border-color: var(--gold-bright);
}

.amount-preset.active {
  background: var(--emerald);
  border-color: var(--emerald);
  color: #ffffff;
}

.amount-input-wrap {
  position: relative;
}

.amount-input-icon {
  position: absolute;
  left: 1rem;
  top: 50%;
  transform: translateY(-50%);
  color: var(--text-faint);
}

.amount-input {
  width: 100%;
  padding: 1rem 1rem 1rem 3rem;
  background: var(--cream);
  border: 2px solid var(--sand);
  border-radius: 16px;
  font-family: inherit;
  font-size: var(--text-lg);
  font-weight: 700;
  color: var(--text-strong);
  transition: border-color 0.2s ease;
}

.amount-input:focus {
  outline: none;
  border-color: var(--gold-bright);
}

.method-toggle {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0.75rem;
}

.method-option {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.6rem;
  padding: 1rem;
  background: transparent;
  border: 2px solid var(--sand);
  border-radius: 16px;
  color: var(--emerald);
  font-size: var(--text-base);
  font-weight: 700;
  cursor: pointer;
  transition: all 0.2s ease;
}

.method-option:hover {
  border-color: var(--gold-bright);
}

.method-option.active {
  background: var(--emerald);
  border-color: var(--emerald);
  color: #ffffff;
}

.donate-footnote {
  text-align: center;
  font-size: 0.65rem;
  font-weight: 700;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--text-faint);
}

/* === Donation Success === */
.donate-success-screen {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
  background: linear-gradient(160deg, var(--emerald-deep), var(--emerald));
}

.donate-success-card {
  width: 100%;
  max-width: 480px;
  padding: 3rem;
  background: #ffffff;
  border-radius: 40px;
  box-shadow: var(--shadow-pop);
  text-align: center;
  animation: pop-in 0.3s ease;
}

.donate-success-icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 96px;
  height: 96px;
  margin-bottom: 2rem;
  background: var(--emerald-tint);
  border-radius: 50%;
  color: var(--emerald-soft);
}

.donate-success-title {
  font-size: var(--text-2xl);
  margin-bottom: 1rem;
}

.donate-success-text {
  color: var(--text-body);
  font-size: var(--text-lg);
  margin-bottom: 2rem;
}

.donate-success-amount {
  color: var(--gold);
  font-weight: 700;
}

/* === Spinners === */
.button-spinner {
  width: 22px;
  height: 22px;
  border: 3px solid rgba(255, 255, 255, 0.4);
  border-top-color: #ffffff;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

.button-spinner.dark {
  border-color: rgba(6, 95, 70, 0.25);
  border-top-color: var(--emerald);
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Markdown Content === */
.markdown-content {
  color: var(--text-body);
}

.markdown-content p {
  margin-bottom: 1rem;
}

.markdown-content p:last-child {
  margin-bottom: 0;
}

.markdown-content strong {
  color: var(--emerald-deep);
}

.markdown-content em {
  color: var(--gold);
}

.markdown-content ul,
.markdown-content ol {
  margin: 0 0 1rem 1.25rem;
}

.markdown-content ul {
  list-style: disc;
}

.markdown-content h1,
.markdown-content h2,
.markdown-content h3 {
  margin-bottom: 0.5rem;
}

/* === Accessibility === */
*:focus-visible {
  outline: 2px solid var(--gold-bright);
  outline-offset: 2px;
}

@media (prefers-reduced-motion: reduce) {
  *,
  *::before,
  *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }

  html {
    scroll-behavior: auto;
  }
}

/* === Responsive Layout for Narrow Windows === */
@media (max-width: 1024px) {
  .prayer-grid {
    grid-template-columns: repeat(2, 1fr);
  }

  .services-grid,
  .events-grid {
    grid-template-columns: repeat(2, 1fr);
  }

  .gallery-columns {
    columns: 2;
  }

  .footer-grid {
    grid-template-columns: 1fr 1fr;
  }
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }

  .nav-menu-button {
    display: flex;
  }

  .mobile-menu {
    display: flex;
  }

  .hero-title {
    font-size: 2.5rem;
  }

  .section-inner {
    padding: 3.5rem 1.25rem;
  }

  .about-grid,
  .donate-grid {
    grid-template-columns: 1fr;
    gap: 2.5rem;
  }

  .services-grid,
  .events-grid {
    grid-template-columns: 1fr;
  }

  .next-prayer-banner {
    flex-direction: column;
    gap: 1rem;
    text-align: center;
  }

  .next-prayer-divider {
    display: none;
  }

  .next-prayer-who,
  .next-prayer-when {
    text-align: center;
  }

  .donate-cta {
    flex-direction: column;
    text-align: center;
  }

  .donate-title {
    font-size: 2.5rem;
  }
}

@media (max-width: 560px) {
  .prayer-grid {
    grid-template-columns: 1fr;
  }

  .gallery-columns {
    columns: 1;
  }

  .footer-grid {
    grid-template-columns: 1fr;
  }

  .modal-actions {
    flex-direction: column;
  }

  .modal-actions .ghost-button {
    width: 100%;
  }
}
"#;
