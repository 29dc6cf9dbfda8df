pub fn render_index(date: &str, score: f64, oath: &str) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{SCORE}}", &format!("{score:.0}"))
        .replace("{{OATH}}", &escape_html(oath))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Day Success Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f3f6ef;
      --bg-2: #cfe3cb;
      --ink: #24302a;
      --accent: #3e7c59;
      --accent-2: #c96f3a;
      --danger: #b14a3c;
      --card: rgba(255, 255, 255, 0.9);
      --line: rgba(36, 48, 42, 0.12);
      --shadow: 0 24px 60px rgba(45, 72, 58, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e8f0df 60%, #f4f1e6 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 18px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 4px;
      font-size: 1.2rem;
    }

    .subtitle {
      margin: 4px 0 0;
      color: #5c6a60;
      font-size: 0.95rem;
    }

    .score-badge {
      display: grid;
      place-items: center;
      width: 108px;
      height: 108px;
      border-radius: 50%;
      background: conic-gradient(var(--accent) calc(var(--score) * 1%), var(--line) 0);
      position: relative;
    }

    .score-badge::before {
      content: "";
      position: absolute;
      inset: 10px;
      border-radius: 50%;
      background: #fff;
    }

    .score-badge span {
      position: relative;
      font-size: 1.7rem;
      font-weight: 600;
    }

    section {
      border-top: 1px solid var(--line);
      padding-top: 22px;
    }

    .section-head {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      margin-bottom: 14px;
    }

    .category {
      border: 1px solid var(--line);
      border-radius: 16px;
      padding: 14px 16px;
      margin-bottom: 12px;
    }

    .category-title {
      display: flex;
      align-items: center;
      gap: 8px;
      font-weight: 600;
      margin-bottom: 10px;
    }

    .category-title .dot {
      width: 10px;
      height: 10px;
      border-radius: 50%;
      background: var(--line);
    }

    .task-row {
      display: flex;
      align-items: center;
      gap: 10px;
      padding: 4px 0;
    }

    .task-row label {
      flex: 1;
    }

    .task-row input[type="number"],
    .task-row input[type="text"] {
      width: 110px;
      padding: 6px 8px;
      border: 1px solid var(--line);
      border-radius: 8px;
      font: inherit;
    }

    .task-row input[type="text"] {
      width: 200px;
    }

    button {
      font: inherit;
      border: none;
      border-radius: 999px;
      padding: 10px 22px;
      cursor: pointer;
      transition: transform 120ms ease, opacity 120ms ease;
    }

    button:hover {
      transform: translateY(-1px);
    }

    .btn-save {
      background: var(--accent);
      color: #fff;
    }

    .btn-reset {
      background: transparent;
      color: var(--danger);
      border: 1px solid var(--danger);
    }

    .btn-small {
      padding: 4px 12px;
      font-size: 0.85rem;
      background: #eef3ea;
      border: 1px solid var(--line);
    }

    .btn-danger {
      background: transparent;
      border: 1px solid var(--danger);
      color: var(--danger);
    }

    .tabs {
      display: flex;
      gap: 6px;
      background: #eef3ea;
      border-radius: 999px;
      padding: 4px;
    }

    .tab {
      background: transparent;
      padding: 6px 16px;
      border-radius: 999px;
      color: #5c6a60;
    }

    .tab.active {
      background: #fff;
      color: var(--ink);
      box-shadow: 0 4px 12px rgba(45, 72, 58, 0.12);
    }

    .chart-card {
      border: 1px solid var(--line);
      border-radius: 16px;
      padding: 12px;
    }

    .chart-grid {
      stroke: var(--line);
      stroke-width: 1;
    }

    .chart-axis {
      stroke: #5c6a60;
      stroke-width: 1;
      stroke-dasharray: 4 4;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 2.5;
    }

    .chart-point {
      fill: var(--accent-2);
    }

    .chart-label {
      font-size: 11px;
      fill: #5c6a60;
    }

    .metrics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 12px;
      margin-top: 14px;
    }

    .stat {
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 10px 14px;
      display: grid;
      gap: 2px;
    }

    .stat .label {
      font-size: 0.8rem;
      color: #5c6a60;
    }

    .stat .value {
      font-size: 1.3rem;
      font-weight: 600;
    }

    .goal {
      display: grid;
      gap: 6px;
      border: 1px solid var(--line);
      border-radius: 16px;
      padding: 12px 16px;
      margin-bottom: 10px;
    }

    .goal-head {
      display: flex;
      align-items: baseline;
      gap: 10px;
    }

    .goal-head .meta {
      margin-left: auto;
      font-size: 0.9rem;
      color: #5c6a60;
    }

    .goal-bar {
      height: 10px;
      border-radius: 999px;
      background: #eef3ea;
      overflow: hidden;
    }

    .goal-bar div {
      height: 100%;
      background: var(--accent);
    }

    .goal-actions {
      display: flex;
      align-items: center;
      gap: 8px;
    }

    .goal-actions input {
      width: 110px;
      padding: 6px 8px;
      border: 1px solid var(--line);
      border-radius: 8px;
      font: inherit;
    }

    .goal-form {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
      margin-top: 12px;
    }

    .goal-form input {
      padding: 8px 10px;
      border: 1px solid var(--line);
      border-radius: 8px;
      font: inherit;
    }

    .status {
      min-height: 22px;
      font-size: 0.9rem;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: var(--accent);
    }

    .hint {
      color: #5c6a60;
      font-size: 0.85rem;
      margin: 0;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Day Success</h1>
        <p class="subtitle">{{OATH}}</p>
        <p class="subtitle" id="date">{{DATE}}</p>
      </div>
      <div class="score-badge" id="score-badge" style="--score: {{SCORE}}">
        <span id="score">{{SCORE}}</span>
      </div>
    </header>

    <section>
      <div class="section-head">
        <div>
          <h2>Today</h2>
          <p class="subtitle">Tick habits, log minutes, calories and spending, then save.</p>
        </div>
        <div>
          <button class="btn-save" id="save-btn" type="button">Save day</button>
          <button class="btn-reset" id="reset-btn" type="button">Reset</button>
        </div>
      </div>
      <div id="categories"></div>
    </section>

    <section>
      <div class="section-head">
        <div>
          <h2 id="chart-title">Average score</h2>
          <p class="subtitle" id="chart-subtitle">Per day.</p>
        </div>
        <div class="tabs" role="tablist">
          <button class="tab active" type="button" data-mode="daily" role="tab" aria-selected="true">Daily</button>
          <button class="tab" type="button" data-mode="weekly" role="tab" aria-selected="false">Weekly</button>
          <button class="tab" type="button" data-mode="monthly" role="tab" aria-selected="false">Monthly</button>
        </div>
      </div>
      <div class="chart-card">
        <svg id="chart" viewBox="0 0 600 260" aria-label="Score chart" role="img"></svg>
      </div>
      <div class="metrics">
        <div class="stat">
          <span class="label">Avg score</span>
          <span class="value" id="metric-score">--</span>
        </div>
        <div class="stat">
          <span class="label">Time (min)</span>
          <span class="value" id="metric-time">--</span>
        </div>
        <div class="stat">
          <span class="label">Calories</span>
          <span class="value" id="metric-calories">--</span>
        </div>
        <div class="stat">
          <span class="label">Avg kcal/entry</span>
          <span class="value" id="metric-calorie-avg">--</span>
        </div>
        <div class="stat">
          <span class="label">Spent</span>
          <span class="value" id="metric-expenses">--</span>
        </div>
      </div>
    </section>

    <section>
      <div class="section-head">
        <div>
          <h2>Goals</h2>
          <p class="subtitle">Long-running targets, independent of daily records.</p>
        </div>
      </div>
      <div id="goals"></div>
      <form class="goal-form" id="goal-form">
        <input id="goal-name" placeholder="Goal" required />
        <input id="goal-target" type="number" placeholder="Target" required />
        <input id="goal-start" type="number" placeholder="Start (optional)" />
        <input id="goal-unit" placeholder="Unit" required />
        <input id="goal-category" placeholder="Category" required />
        <button class="btn-save" type="submit">Add goal</button>
      </form>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Unsaved days show the template from your settings; only saved days feed the statistics.</p>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const scoreEl = document.getElementById('score');
    const scoreBadgeEl = document.getElementById('score-badge');
    const dateEl = document.getElementById('date');
    const categoriesEl = document.getElementById('categories');
    const goalsEl = document.getElementById('goals');
    const chartEl = document.getElementById('chart');
    const chartSubtitleEl = document.getElementById('chart-subtitle');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    const today = dateEl.textContent.trim();
    let dayData = null;
    let settingsData = null;
    let activeMode = 'daily';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const setScore = (score) => {
      scoreEl.textContent = Math.round(score);
      scoreBadgeEl.style.setProperty('--score', Math.round(score));
    };

    const kindControl = (task, c, t) => {
      if (task.kind === 'checkbox') {
        return `<input type="checkbox" data-c="${c}" data-t="${t}" data-field="completed" ${task.completed ? 'checked' : ''} />`;
      }
      if (task.kind === 'time') {
        return `<input type="number" min="0" step="5" data-c="${c}" data-t="${t}" data-field="value" value="${task.value}" /> min`;
      }
      if (task.kind === 'calorie') {
        return `<input type="number" min="0" step="200" data-c="${c}" data-t="${t}" data-field="value" value="${task.value}" />
          <button class="btn-small" type="button" data-bump="200" data-c="${c}" data-t="${t}">+200</button> kcal`;
      }
      if (task.kind === 'expense') {
        return `<input type="number" min="0" data-c="${c}" data-t="${t}" data-field="value" value="${task.value}" />`;
      }
      return `<input type="text" data-c="${c}" data-t="${t}" data-field="text_value" value="${task.text_value || ''}" />`;
    };

    const categoryColor = (id) =>
      (settingsData && settingsData.category_colors && settingsData.category_colors[id]) || '';

    const renderDay = () => {
      categoriesEl.innerHTML = dayData.categories
        .map((category, c) => `
          <div class="category">
            <div class="category-title">
              <span class="dot" style="background: ${categoryColor(category.id) || 'var(--line)'}"></span>
              <span>${category.emoji}</span>
              <span>${category.name}</span>
            </div>
            ${category.tasks
              .map((task, t) => `
                <div class="task-row">
                  <label>${task.name}</label>
                  ${kindControl(task, c, t)}
                </div>`)
              .join('')}
          </div>`)
        .join('');
    };

    const readInputs = () => {
      categoriesEl.querySelectorAll('input[data-field]').forEach((input) => {
        const task = dayData.categories[Number(input.dataset.c)].tasks[Number(input.dataset.t)];
        if (input.dataset.field === 'completed') {
          task.completed = input.checked;
        } else if (input.dataset.field === 'value') {
          task.value = Math.max(0, Math.round(Number(input.value) || 0));
        } else {
          task.text_value = input.value;
        }
      });
    };

    const loadDay = async () => {
      const res = await fetch(`/api/day/${today}`);
      if (!res.ok) {
        throw new Error('Unable to load today');
      }
      dayData = await res.json();
      setScore(dayData.score);
      renderDay();
    };

    const saveDay = async () => {
      readInputs();
      setStatus('Saving...', 'info');
      const res = await fetch(`/api/day/${today}`, {
        method: 'PUT',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ categories: dayData.categories })
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Save failed');
      }
      dayData = await res.json();
      setScore(dayData.score);
      renderDay();
      loadStats().catch((err) => setStatus(err.message, 'error'));
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const resetDay = async () => {
      const res = await fetch(`/api/day/${today}`, { method: 'DELETE' });
      if (!res.ok) {
        throw new Error('Reset failed');
      }
      dayData = await res.json();
      setScore(dayData.score);
      renderDay();
      loadStats().catch((err) => setStatus(err.message, 'error'));
    };

    const formatNumber = (value, decimals = 0) => {
      if (typeof value !== 'number' || Number.isNaN(value)) {
        return '--';
      }
      return decimals === 0 ? Math.round(value).toString() : value.toFixed(decimals);
    };

    const renderLineChart = (points) => {
      if (!points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No saved days yet</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;

      const values = points.map((point) => point.value);
      let min = Math.min(...values, 0);
      let max = Math.max(...values, 0);
      if (min === max) {
        max += 1;
      }

      const range = max - min;
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value - min) * scaleY;

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.value).toFixed(2)}`)
        .join(' ');

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${formatNumber(value)}</text>`;
      }

      const labelEvery = points.length > 8 ? Math.ceil(points.length / 8) : 1;
      const xLabels = points
        .map((point, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${point.label}</text>`;
        })
        .join('');

      const circles = points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.value)}" r="4" />`)
        .join('');

      chartEl.innerHTML = `${grid}<path class="chart-line" d="${path}" />${circles}${xLabels}`;
    };

    const renderStats = (stats) => {
      const rows = stats.rows;
      renderLineChart(rows.map((row) => ({ label: row.label, value: row.avg_score })));

      const latest = rows[rows.length - 1];
      chartSubtitleEl.textContent = latest
        ? `Latest bucket: ${latest.start_date} to ${latest.end_date} (${latest.days} day${latest.days === 1 ? '' : 's'}).`
        : 'Save a day to see trends.';

      document.getElementById('metric-score').textContent = latest ? formatNumber(latest.avg_score) : '--';
      document.getElementById('metric-time').textContent = latest ? formatNumber(latest.total_time) : '--';
      document.getElementById('metric-calories').textContent = latest ? formatNumber(latest.total_calories) : '--';
      document.getElementById('metric-calorie-avg').textContent =
        latest && latest.calorie_entries > 0
          ? formatNumber(latest.total_calories / latest.calorie_entries)
          : '--';
      document.getElementById('metric-expenses').textContent = latest ? formatNumber(latest.total_expenses) : '--';
    };

    const loadStats = async () => {
      const res = await fetch(`/api/stats?mode=${activeMode}`);
      if (!res.ok) {
        throw new Error('Unable to load stats');
      }
      renderStats(await res.json());
    };

    const setActiveMode = (mode) => {
      activeMode = mode;
      tabs.forEach((button) => {
        const isActive = button.dataset.mode === mode;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      loadStats().catch((err) => setStatus(err.message, 'error'));
    };

    const goalPercent = (goal) => {
      const start = goal.start ?? 0;
      const span = goal.target - start;
      if (span <= 0) {
        return 0;
      }
      return Math.max(0, Math.min(100, ((goal.current - start) / span) * 100));
    };

    const renderGoals = (goals) => {
      goalsEl.innerHTML = goals
        .map((goal) => `
          <div class="goal">
            <div class="goal-head">
              <strong>${goal.name}</strong>
              <span class="meta">${goal.current} / ${goal.target} ${goal.unit} · ${goal.category}</span>
            </div>
            <div class="goal-bar"><div style="width: ${goalPercent(goal)}%; background: ${categoryColor(goal.category) || 'var(--accent)'}"></div></div>
            <div class="goal-actions">
              <input type="number" placeholder="New value" data-goal="${goal.id}" />
              <button class="btn-small" type="button" data-progress="${goal.id}">Update</button>
              <button class="btn-small btn-danger" type="button" data-remove="${goal.id}">Delete</button>
            </div>
          </div>`)
        .join('');
    };

    const loadSettings = async () => {
      const res = await fetch('/api/settings');
      if (!res.ok) {
        throw new Error('Unable to load settings');
      }
      settingsData = await res.json();
    };

    const loadGoals = async () => {
      const res = await fetch('/api/goals');
      if (!res.ok) {
        throw new Error('Unable to load goals');
      }
      renderGoals(await res.json());
    };

    const addGoal = async (event) => {
      event.preventDefault();
      const payload = {
        name: document.getElementById('goal-name').value,
        target: Number(document.getElementById('goal-target').value),
        start: document.getElementById('goal-start').value === '' ? null : Number(document.getElementById('goal-start').value),
        unit: document.getElementById('goal-unit').value,
        category: document.getElementById('goal-category').value
      };
      const res = await fetch('/api/goals', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(payload)
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Unable to add goal');
      }
      event.target.reset();
      await loadGoals();
    };

    categoriesEl.addEventListener('click', (event) => {
      const bump = event.target.dataset.bump;
      if (!bump) {
        return;
      }
      const input = categoriesEl.querySelector(
        `input[data-c="${event.target.dataset.c}"][data-t="${event.target.dataset.t}"]`
      );
      input.value = (Number(input.value) || 0) + Number(bump);
    });

    goalsEl.addEventListener('click', async (event) => {
      const progressId = event.target.dataset.progress;
      const removeId = event.target.dataset.remove;
      try {
        if (progressId) {
          const input = goalsEl.querySelector(`input[data-goal="${progressId}"]`);
          const value = Number(input.value);
          if (Number.isNaN(value)) {
            return;
          }
          const res = await fetch(`/api/goals/${progressId}/progress`, {
            method: 'POST',
            headers: { 'content-type': 'application/json' },
            body: JSON.stringify({ value })
          });
          if (!res.ok) {
            throw new Error(await res.text() || 'Update failed');
          }
          await loadGoals();
        } else if (removeId) {
          const res = await fetch(`/api/goals/${removeId}`, { method: 'DELETE' });
          if (!res.ok) {
            throw new Error(await res.text() || 'Delete failed');
          }
          await loadGoals();
        }
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveMode(button.dataset.mode));
    });

    document.getElementById('save-btn').addEventListener('click', () => {
      saveDay().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('reset-btn').addEventListener('click', () => {
      resetDay().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('goal-form').addEventListener('submit', (event) => {
      addGoal(event).catch((err) => setStatus(err.message, 'error'));
    });

    loadSettings()
      .then(() => Promise.all([loadDay(), loadStats(), loadGoals()]))
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
