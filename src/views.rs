use action_items_core::Route;
use web_sys as web;

const HOME_HTML: &str = r##"
<div class="page">
  <div class="ribbon r1"></div>
  <div class="ribbon r2"></div>
  <div class="shell">
    <header id="hero" class="hero">
      <div class="badge">For my Gege • from your Kitty 🐱</div>
      <h1 class="title-strong">Action Items</h1>
      <p class="subtitle">
        Goal: Align on behaviors and expectations that create a healthy, emotionally safe, and respectful relationship for both of us.
      </p>
      <div class="hero-actions">
        <button id="print-btn" class="btn">Print / Save PDF</button>
        <a class="btn ghost" href="#success">Jump to Success Criteria</a>
      </div>
      <div class="kawaii-hint">scroll ↓ for cute moments</div>
    </header>

    <section class="card">
      <h2>1) My Action Items</h2>
      <ul class="list">
        <li><span class="dot"></span>Improve emotional regulation: pause and communicate when I feel overwhelmed instead of shutting down.</li>
        <li><span class="dot"></span>Eliminate personal attacks or reactive comments. Focus on constructive communication.</li>
        <li><span class="dot"></span>Limit rehashing of past issues; address them once calmly, seek resolution, and move forward.</li>
      </ul>
    </section>

    <section class="card">
      <h2>2) Your Action Items</h2>
      <ul class="list">
        <li><span class="dot"></span>Maintain emotional safety: listen and validate before defending or problem-solving.</li>
        <li><span class="dot"></span>Remove double standards. If you wouldn’t want me doing something, don’t do it.</li>
        <li><span class="dot"></span>Consider my sensitivity before engaging with others—if I saw it, would it feel respectful?</li>
        <li><span class="dot"></span>Avoid controlling language or restrictions; trust should define boundaries.</li>
      </ul>
    </section>

    <section class="card">
      <h2>3) Joint Action Items</h2>
      <div class="table-wrap">
        <table class="table">
          <thead>
            <tr><th>Category</th><th>Action</th><th>Frequency</th><th>Owner</th></tr>
          </thead>
          <tbody>
            <tr><td>Check-ins</td><td>15-minute weekly sync for emotional &amp; physical health of relationship</td><td>Weekly</td><td>Both</td></tr>
            <tr><td>Conflict</td><td>No personal insults or withdrawal; resolve respectfully</td><td>Ongoing</td><td>Both</td></tr>
            <tr><td>Intimacy</td><td>Align expectations: approx. 1–2× weekly based on mutual comfort &amp; consent</td><td>Weekly</td><td>Both</td></tr>
            <tr><td>Transparency</td><td>Communicate triggers or discomfort directly</td><td>Ongoing</td><td>Both</td></tr>
          </tbody>
        </table>
      </div>
    </section>

    <section id="success" class="card">
      <h2>4) Success Criteria</h2>
      <ul class="list">
        <li><span class="dot"></span>Mutual respect and emotional safety maintained.</li>
        <li><span class="dot"></span>Zero unresolved conflicts carried into next week.</li>
        <li><span class="dot"></span>Affection and trust outweigh tension or control.</li>
      </ul>
    </section>

    <div class="agree">
      <div class="agree-text">If you agree, tap the heart — your Kitty will feel it 💞</div>
      <button id="agree-btn" class="btn big">I Agree 💗</button>
    </div>

    <footer class="foot">
      <span>💗 Built with love &amp; accountability • <span class="sig">— Your Kitty</span></span>
    </footer>
  </div>
</div>
"##;

const LOVE_HTML: &str = r##"
<div class="love-wrap">
  <div class="love-card">
    <h1 class="love-title">我爱你，哥哥 💗</h1>
    <p class="love-sub">
      From your Kitty: thanks for choosing growth, listening, and respect. <br />
      yyds gege — 我们一起加油，好吗？
    </p>
    <img class="love-gif" alt="cute love gif" src="https://media.giphy.com/media/MDJ9IbxxvDUQM/giphy.gif" />
    <a id="back-home" href="/" class="btn back">返回主页 • Back to Home</a>
  </div>
</div>
"##;

pub fn html_for(route: Option<Route>) -> &'static str {
    match route {
        Some(Route::Home) => HOME_HTML,
        Some(Route::Love) => LOVE_HTML,
        None => "",
    }
}

pub fn render(document: &web::Document, root: &web::Element, route: Option<Route>) {
    root.set_inner_html(html_for(route));
    if let Some(r) = route {
        document.set_title(r.title());
    }
}
