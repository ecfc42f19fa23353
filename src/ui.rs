use crate::window;
use chrono::NaiveDate;

/// Planning page with the initial window anchor baked in, so the script
/// starts from the same week the server considers current.
pub fn render_planning_page(today: NaiveDate) -> String {
    PLANNING_HTML
        .replace("{{STYLE}}", PAGE_STYLE)
        .replace("{{ANCHOR}}", &window::week_start(today).to_string())
}

pub fn render_users_page() -> String {
    USERS_HTML.replace("{{STYLE}}", PAGE_STYLE)
}

const PAGE_STYLE: &str = r#"
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --smart: #3a7ca5;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1160px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .top-nav {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .top-nav a {
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b645d;
      text-decoration: none;
    }

    .top-nav a.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .controls {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .controls .range {
      font-weight: 600;
      color: var(--accent-2);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      background: rgba(47, 72, 88, 0.25);
      box-shadow: none;
      cursor: default;
    }

    .grid-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      overflow-x: auto;
    }

    table {
      border-collapse: collapse;
      width: 100%;
      font-size: 0.9rem;
    }

    th,
    td {
      border: 1px solid rgba(47, 72, 88, 0.12);
      padding: 8px 6px;
      text-align: center;
      white-space: nowrap;
    }

    th {
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.06em;
      color: #8b857d;
    }

    .member-name {
      text-align: left;
      font-weight: 600;
      color: var(--accent-2);
    }

    .status-cell {
      cursor: pointer;
      min-width: 42px;
      font-weight: 600;
      user-select: none;
    }

    .status-office {
      background: white;
    }

    .status-smart {
      background: rgba(58, 124, 165, 0.18);
      color: var(--smart);
    }

    .status-away {
      background: rgba(255, 107, 74, 0.18);
      color: var(--accent);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      display: block;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      display: block;
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    form {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    input {
      flex: 1 1 220px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 14px;
      padding: 12px 16px;
      font-size: 0.95rem;
      font-family: inherit;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
"#;

const PLANNING_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>TeamPlanner</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Team planning</h1>
        <p class="subtitle">Click a day to cycle office, smart working, away.</p>
      </div>
      <nav class="top-nav">
        <a class="active" href="/planning">Planning</a>
        <a href="/users">Team members</a>
      </nav>
    </header>

    <section class="controls">
      <button id="prev-week" type="button">&larr; Previous week</button>
      <span id="range-label" class="range"></span>
      <button id="next-week" type="button">Next week &rarr;</button>
    </section>

    <section class="grid-card">
      <table id="planning-table">
        <thead></thead>
        <tbody></tbody>
      </table>
    </section>

    <section class="panel" id="stats-grid"></section>

    <p class="hint">Statistics cover the first week of the visible range. An empty cell means office.</p>
  </main>

  <script>
    const prevBtn = document.getElementById('prev-week');
    const nextBtn = document.getElementById('next-week');
    const rangeEl = document.getElementById('range-label');
    const tableHead = document.querySelector('#planning-table thead');
    const tableBody = document.querySelector('#planning-table tbody');
    const statsGrid = document.getElementById('stats-grid');

    const STATUS_ORDER = ['office', 'smart', 'away'];
    const STATUS_LABELS = { office: '', smart: 'S', away: 'A' };
    const STATUS_CLASSES = { office: 'status-office', smart: 'status-smart', away: 'status-away' };

    let anchor = '{{ANCHOR}}';
    let requestSeq = 0;

    const updateCell = (cell, status) => {
      cell.dataset.status = status;
      cell.textContent = STATUS_LABELS[status];
      cell.className = `status-cell ${STATUS_CLASSES[status]}`;
    };

    const renderStats = (stats) => {
      statsGrid.innerHTML = '';
      const tiles = [
        ['Office days', stats.office],
        ['Smart-working days', stats.smart],
        ['Away days', stats.away],
      ];
      tiles.forEach(([label, tile]) => {
        const stat = document.createElement('div');
        stat.className = 'stat';
        const labelEl = document.createElement('span');
        labelEl.className = 'label';
        labelEl.textContent = label;
        const valueEl = document.createElement('span');
        valueEl.className = 'value';
        valueEl.textContent = `${tile.count} (${tile.percent}%)`;
        stat.appendChild(labelEl);
        stat.appendChild(valueEl);
        statsGrid.appendChild(stat);
      });
    };

    const recountStats = () => {
      const totals = { office: 0, smart: 0, away: 0 };
      let slots = 0;
      tableBody.querySelectorAll('tr').forEach((row) => {
        Array.from(row.querySelectorAll('.status-cell'))
          .slice(0, 7)
          .forEach((cell) => {
            totals[cell.dataset.status] += 1;
            slots += 1;
          });
      });
      const percent = (value) => (slots ? Math.round((value / slots) * 100) : 0);
      renderStats({
        office: { count: totals.office, percent: percent(totals.office) },
        smart: { count: totals.smart, percent: percent(totals.smart) },
        away: { count: totals.away, percent: percent(totals.away) },
      });
    };

    const renderBoard = (view) => {
      anchor = view.start;
      rangeEl.textContent = view.range_label;
      prevBtn.disabled = !view.nav.prev_enabled;
      prevBtn.dataset.anchor = view.nav.prev_anchor;
      nextBtn.disabled = !view.nav.next_enabled;
      nextBtn.dataset.anchor = view.nav.next_anchor;

      tableHead.innerHTML = '';
      const headerRow = document.createElement('tr');
      const nameHeader = document.createElement('th');
      nameHeader.textContent = 'Team member';
      headerRow.appendChild(nameHeader);
      view.days.forEach((day) => {
        const th = document.createElement('th');
        th.textContent = day.label;
        headerRow.appendChild(th);
      });
      tableHead.appendChild(headerRow);

      tableBody.innerHTML = '';
      view.rows.forEach((row) => {
        const tr = document.createElement('tr');
        const name = document.createElement('td');
        name.className = 'member-name';
        name.textContent = row.name;
        tr.appendChild(name);
        row.cells.forEach((cell) => {
          const td = document.createElement('td');
          td.dataset.userId = row.user_id;
          td.dataset.day = cell.day;
          updateCell(td, cell.status);
          tr.appendChild(td);
        });
        tableBody.appendChild(tr);
      });

      renderStats(view.stats);
    };

    const loadBoard = async (nextAnchor) => {
      const seq = ++requestSeq;
      const res = await fetch(`/api/planning?anchor=${nextAnchor}`);
      if (!res.ok) {
        return;
      }
      const view = await res.json();
      if (seq !== requestSeq) {
        return; // a newer window was requested while this one was in flight
      }
      renderBoard(view);
    };

    tableBody.addEventListener('click', (event) => {
      const cell = event.target.closest('.status-cell');
      if (!cell) {
        return;
      }
      const next = STATUS_ORDER[(STATUS_ORDER.indexOf(cell.dataset.status) + 1) % STATUS_ORDER.length];
      updateCell(cell, next);
      fetch('/api/schedule', {
        method: 'PUT',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({
          user_id: Number(cell.dataset.userId),
          day: cell.dataset.day,
          status: next,
        }),
      }).then(() => recountStats());
    });

    prevBtn.addEventListener('click', () => loadBoard(prevBtn.dataset.anchor));
    nextBtn.addEventListener('click', () => loadBoard(nextBtn.dataset.anchor));

    loadBoard(anchor);
  </script>
</body>
</html>
"#;

const USERS_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>TeamPlanner - Team members</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Team members</h1>
        <p class="subtitle">People who appear on the planning board.</p>
      </div>
      <nav class="top-nav">
        <a href="/planning">Planning</a>
        <a class="active" href="/users">Team members</a>
      </nav>
    </header>

    <form id="user-form">
      <input id="user-name" type="text" placeholder="Full name" autocomplete="off" />
      <input id="user-email" type="text" placeholder="Email address" autocomplete="off" />
      <button type="submit">Add member</button>
    </form>

    <section class="grid-card">
      <table id="user-table">
        <thead>
          <tr>
            <th>ID</th>
            <th>Name</th>
            <th>Email</th>
          </tr>
        </thead>
        <tbody></tbody>
      </table>
    </section>
  </main>

  <script>
    const userTableBody = document.querySelector('#user-table tbody');
    const userForm = document.getElementById('user-form');
    const nameInput = document.getElementById('user-name');
    const emailInput = document.getElementById('user-email');

    const loadUsers = async () => {
      const res = await fetch('/api/users');
      if (!res.ok) {
        return;
      }
      const users = await res.json();
      userTableBody.innerHTML = '';
      users.forEach((user) => {
        const row = document.createElement('tr');
        [user.id, user.name, user.email].forEach((value) => {
          const cell = document.createElement('td');
          cell.textContent = value;
          row.appendChild(cell);
        });
        userTableBody.appendChild(row);
      });
    };

    userForm.addEventListener('submit', (event) => {
      event.preventDefault();
      const name = nameInput.value.trim();
      const email = emailInput.value.trim();
      if (!name || !email) {
        return;
      }
      fetch('/api/users', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ name, email }),
      }).then(() => {
        nameInput.value = '';
        emailInput.value = '';
        loadUsers();
      });
    });

    loadUsers();
  </script>
</body>
</html>
"#;
