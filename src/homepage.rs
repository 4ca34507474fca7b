pub const HOMEPAGE_HTML: &str = r#"
<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>AceAi - Your Smart Study Buddy</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 0; display: flex; min-height: 100vh; }
        nav { width: 240px; background: #f0f2f6; padding: 20px; }
        nav h2 { margin-top: 0; }
        nav button { display: block; width: 100%; text-align: left; background: none; border: none; padding: 10px; cursor: pointer; border-radius: 4px; }
        nav button.active, nav button:hover { background: #dde3ee; }
        main { flex: 1; padding: 30px; max-width: 900px; }
        .card { background: #f5f5f5; padding: 15px; border-radius: 8px; margin: 10px 0; white-space: pre-wrap; }
        .metric { display: inline-block; background: white; border-left: 4px solid #007bff; padding: 10px 15px; margin: 5px; border-radius: 5px; }
        .form-group { margin: 12px 0; }
        label { display: block; margin-bottom: 5px; font-weight: bold; }
        input, textarea, select { width: 100%; padding: 8px; border: 1px solid #ddd; border-radius: 4px; box-sizing: border-box; }
        button.primary { background: #ff4b4b; color: white; padding: 10px 20px; border: none; border-radius: 4px; cursor: pointer; margin: 5px 0; }
        video { width: 320px; border-radius: 8px; background: #000; }
        .hidden { display: none; }
        .success { background: #d4edda; } .warning { background: #fff3cd; } .info { background: #d1ecf1; }
        footer { font-size: 12px; color: #666; margin-top: 40px; }
    </style>
</head>
<body>
    <nav>
        <h2>🧠 AceAi Navigation</h2>
        <div id="sidebar"></div>
        <hr>
        <div class="card info">Built with ❤️ for the YUVAi Challenge</div>
    </nav>
    <main>
        <div id="page"></div>
        <div id="result"></div>
        <footer>AceAi - Your AI Learning Companion</footer>
    </main>

    <script>
        const ESCAPES = { '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&apos;' };
        const esc = (value) => String(value ?? '').replace(/[&<>"']/g, c => ESCAPES[c]);

        const tips = (list) => (list || []).map(t => `<div class="card info"><strong>${esc(t.title)}</strong><br>${esc(t.body)}</div>`).join('');
        const metrics = (list) => (list || []).map(m => `<div class="metric"><div>${esc(m.label)}</div><h3>${esc(m.value)}</h3><small>${esc(m.delta)}</small></div>`).join('');
        const options = (list) => list.map(v => `<option value="${esc(v)}">${esc(v)}</option>`).join('');
        const lines = (list, prefix = '') => (list || []).map(s => esc(prefix + s)).join('\n');

        let currentSlug = null;
        let camera = null;

        async function post(url, body) {
            const response = await fetch(url, { method: 'POST', headers: {'Content-Type': 'application/json'}, body: JSON.stringify(body) });
            return response.json();
        }

        function show(html) { document.getElementById('result').innerHTML = html; }
        function setText(id, text) { const node = document.getElementById(id); if (node) node.textContent = text; }

        async function loadSidebar() {
            const pages = await (await fetch('/api/pages')).json();
            const sidebar = document.getElementById('sidebar');
            pages.forEach(p => {
                const b = document.createElement('button');
                b.textContent = p.label;
                b.onclick = () => { document.querySelectorAll('nav button').forEach(x => x.classList.remove('active')); b.classList.add('active'); openPage(p.slug); };
                sidebar.appendChild(b);
            });
            sidebar.firstChild.classList.add('active');
            openPage(pages[0].slug);
        }

        async function openPage(slug) {
            stopCamera();
            currentSlug = slug;
            show('');
            const view = await (await fetch('/api/page/' + encodeURIComponent(slug))).json();
            const body = view.body;
            let html = `<h1>${esc(view.title)}</h1>`;
            switch (body.kind) {
                case 'home':
                    html += `<h3>${esc(body.subtitle)}</h3>${metrics(body.metrics)}${tips(body.features)}`;
                    break;
                case 'scheduler':
                    html += `<div class="form-group"><label>📚 Subjects (comma separated):</label><input id="subjects" value="${esc(body.default_subjects)}"></div>
                        <div class="form-group"><label>⏱️ Hours available per day:</label><input id="hours" type="number" min="${esc(body.min_hours)}" max="${esc(body.max_hours)}" value="${esc(body.default_hours)}"></div>
                        <div class="form-group"><label>📅 Upcoming exam date:</label><input id="exam_date" type="date" value="${esc(body.default_exam_date)}"></div>
                        <div class="form-group"><label>🎯 Difficulty level:</label><select id="difficulty">${options(body.difficulties)}</select></div>
                        <div class="form-group"><label><input id="exam_mode" type="checkbox" style="width:auto"> 🚀 Enable Exam Mode</label></div>
                        <button class="primary" onclick="schedule()">Generate Smart Schedule</button>`;
                    break;
                case 'explainer':
                    html += `<div class="form-group"><label>Enter any topic you want to understand:</label><input id="topic" value="${esc(body.default_topic)}"></div>
                        <div class="form-group"><label>Explanation level:</label><select id="level">${options(body.levels)}</select></div>
                        <button class="primary" onclick="explain()">Explain This Topic</button>`;
                    break;
                case 'practice':
                    html += `<div class="form-group"><label>Enter topic for practice questions:</label><input id="topic" value="${esc(body.default_topic)}"></div>
                        <div class="form-group"><label>Question format:</label><select id="format">${options(body.formats)}</select></div>
                        <div class="form-group"><label>Difficulty level:</label><select id="difficulty">${options(body.difficulties)}</select></div>
                        <button class="primary" onclick="practice()">Generate Practice Set</button>`;
                    break;
                case 'flashcards':
                    html += `<div class="form-group"><label>Paste your notes here:</label><textarea id="notes" rows="8" placeholder="${esc(body.placeholder)}"></textarea></div>
                        <button class="primary" onclick="flashcards()">Create Flashcards</button>`;
                    break;
                case 'focus':
                    html += `<div id="camera-status" class="card info">${esc(body.instructions)}</div>
                        <div id="camera-panel" class="hidden">
                            <video id="camera-video" autoplay muted playsinline></video><br>
                            <div class="metric"><div>Camera Focus Score</div><h3 id="camera-score">${esc(body.live.score)}%</h3></div>
                            <div class="metric"><div>Camera Status</div><h3 id="camera-state">${esc(body.live.state)}</h3></div>
                        </div>
                        <h3>Manual Focus Tracking</h3>
                        <div class="metric"><div>Manual Focus Score</div><h3 id="manual-score">${esc(body.manual_score)}%</h3></div>
                        <div class="metric"><div>Manual Status</div><h3 id="manual-state">-</h3></div><br>
                        <select id="activity"><option value="Focused">📚 Looking at book/notes (FOCUSED)</option><option value="Distracted">📺 Looking at screen (DISTRACTED)</option><option value="Away">👋 Away from desk (AWAY)</option></select>
                        <button class="primary" onclick="manualFocus()">Update Focus Status</button>
                        <h3>⏱️ Study Timer</h3>
                        <div class="form-group"><label>Study minutes</label><input id="study_minutes" type="number" min="10" max="120" value="25"></div>
                        <div class="form-group"><label>Break minutes</label><input id="break_minutes" type="number" min="5" max="30" value="5"></div>
                        <button class="primary" onclick="timer()">Start Study Session</button>`;
                    break;
                case 'progress':
                    const d = body.dashboard;
                    html += `<p><strong>Current Level:</strong> ${esc(d.level)}</p><progress value="${esc(d.progress_percent)}" max="100"></progress> ${esc(d.progress_percent)}%
                        <h3>📊 Learning Analytics</h3>${metrics(d.metrics)}
                        <div class="metric"><div>Total Study Hours</div><h3>${esc(d.study_time_hours)}</h3></div>
                        <div class="metric"><div>Learning Efficiency</div><h3>${esc(d.efficiency)}%</h3></div>
                        <h3>🎯 Personalized Recommendations</h3><div class="card info">${lines(d.recommendations)}</div>
                        <h3>Achievements</h3>${d.achievements.map(a => `<div class="card">${esc(a.earned ? '✅' : '🔄')} <strong>${esc(a.name)}</strong><br>${esc(a.description)}</div>`).join('')}
                        <h3>🎯 Set Weekly Goal</h3><select id="goal">${options(body.goals)}</select>
                        <button class="primary" onclick="goal()">Commit to Goal</button>`;
                    break;
            }
            html += tips(view.tips);
            document.getElementById('page').innerHTML = html;
            if (body.kind === 'focus' && body.camera_available) {
                startCamera();
            }
        }

        function stopCamera() {
            if (!camera) return;
            clearInterval(camera.timer);
            camera.stream.getTracks().forEach(t => t.stop());
            camera = null;
        }

        function fallbackToManual(message) {
            stopCamera();
            const panel = document.getElementById('camera-panel');
            if (panel) panel.classList.add('hidden');
            const status = document.getElementById('camera-status');
            if (status) { status.className = 'card warning'; status.textContent = message; }
        }

        // Captures the webcam and posts face boxes from the browser's FaceDetector
        async function startCamera() {
            if (!navigator.mediaDevices || !navigator.mediaDevices.getUserMedia || !('FaceDetector' in window)) {
                fallbackToManual('Webcam face detection not available in this browser - using manual focus tracking');
                return;
            }

            let stream;
            try {
                stream = await navigator.mediaDevices.getUserMedia({ video: true });
            } catch (err) {
                fallbackToManual('Webcam not available - using manual focus tracking');
                return;
            }
            if (currentSlug !== 'focus') {
                stream.getTracks().forEach(t => t.stop());
                return;
            }

            const video = document.getElementById('camera-video');
            video.srcObject = stream;
            document.getElementById('camera-panel').classList.remove('hidden');
            const detector = new FaceDetector({ fastMode: true, maxDetectedFaces: 1 });

            const tick = async () => {
                if (!video.videoWidth) return;
                let faces = [];
                try {
                    faces = (await detector.detect(video)).map(f => ({
                        x: f.boundingBox.x, y: f.boundingBox.y, width: f.boundingBox.width, height: f.boundingBox.height
                    }));
                } catch (err) {
                    faces = [];
                }
                const response = await fetch('/api/focus/frame', {
                    method: 'POST',
                    headers: {'Content-Type': 'application/json'},
                    body: JSON.stringify({ frame_width: video.videoWidth, frame_height: video.videoHeight, faces })
                });
                if (!response.ok) {
                    fallbackToManual('Webcam not available - using manual focus tracking');
                    return;
                }
                const session = await response.json();
                setText('camera-score', session.score + '%');
                setText('camera-state', session.state);
            };
            camera = { stream, timer: setInterval(tick, 500) };
        }

        async function schedule() {
            const data = await post('/api/scheduler', {
                subjects: document.getElementById('subjects').value,
                hours_per_day: parseInt(document.getElementById('hours').value, 10),
                exam_date: document.getElementById('exam_date').value || null,
                difficulty: document.getElementById('difficulty').value,
                exam_mode: document.getElementById('exam_mode').checked
            });
            const p = data.plan;
            if (p.mode === 'exam') {
                show(`<div class="card success"><h3>📋 Your Personalized Study Schedule</h3><strong>Mode:</strong> 🚀 ULTIMATE EXAM PREPARATION
<strong>Time until exam:</strong> ${esc(p.days_until_exam)} days
<strong>Daily commitment:</strong> ${esc(p.hours_per_day)} hours
<strong>Difficulty:</strong> ${esc(p.difficulty)}
<strong>Primary Focus:</strong> ${esc(p.primary.subject)} (${esc(p.primary.hours.toFixed(1))}h daily)
<strong>Secondary Subjects:</strong> ${esc(p.secondary_focus)}
${lines(p.strategy, '• ')}</div>`);
            } else {
                show(`<div class="card success"><h3>📋 Your Personalized Study Schedule</h3><strong>Mode:</strong> 📅 BALANCED LEARNING
<strong>Daily Study Time:</strong> ${esc(p.hours_per_day)} hours
<strong>Subjects:</strong> ${esc(p.subject_count)} subjects
${p.distribution.map(a => `${esc(a.emoji)} <strong>${esc(a.subject)}:</strong> ${esc(a.hours.toFixed(1))} hours`).join('\n')}
${lines(p.approach, '• ')}</div>`);
            }
        }

        async function explain() {
            const data = await post('/api/explain', { topic: document.getElementById('topic').value, level: document.getElementById('level').value });
            if (!data) return;
            let html = `<div class="card ${esc(data.canned ? 'success' : 'info')}">${esc(data.text)}</div>`;
            if (data.ai_insight) {
                html += `<strong>AI Insight:</strong><div class="card info">${esc(data.ai_insight)}</div>`;
            }
            show(html);
        }

        async function practice() {
            const data = await post('/api/practice', {
                topic: document.getElementById('topic').value,
                format: document.getElementById('format').value,
                difficulty: document.getElementById('difficulty').value
            });
            if (!data) return;
            show(`<div class="card success">📝 <strong>${esc(data.title)}</strong></div>
                ${data.questions.map(q => `<p><strong>${esc(q.number)}. ${esc(q.prompt)}</strong><br>${q.options.map(o => esc(o)).join('<br>')}</p>`).join('')}
                <details><summary>📋 Show Answer Key</summary><div class="card">${lines(data.answer_key)}</div></details>`);
        }

        async function flashcards() {
            const data = await post('/api/flashcards', { notes: document.getElementById('notes').value });
            if (!data) return;
            show(`<div class="card success">🃏 <strong>Your Smart Flashcards</strong><br>Generated ${esc(data.cards.length)} flashcards from your notes</div>
                ${data.cards.map(c => `<div class="card"><strong>Flashcard ${esc(c.number)}:</strong>\n<strong>Q:</strong> ${esc(c.question)}\n<strong>A:</strong> ${esc(c.answer)}</div>`).join('')}
                <details><summary>🎯 How to Use These Flashcards Effectively</summary><div class="card">${lines(data.study_tips)}</div></details>`);
        }

        async function manualFocus() {
            const data = await post('/api/focus/manual', { activity: document.getElementById('activity').value });
            setText('manual-score', data.score + '%');
            setText('manual-state', data.state);
            show(`<div class="card">${esc(data.message)}</div>`);
        }

        async function timer() {
            const data = await post('/api/focus/timer', {
                study_minutes: parseInt(document.getElementById('study_minutes').value, 10),
                break_minutes: parseInt(document.getElementById('break_minutes').value, 10)
            });
            show(`<div class="card success">${esc(data.message)}</div>`);
        }

        async function goal() {
            const data = await post('/api/progress/goal', { goal: document.getElementById('goal').value });
            show(`<div class="card success">${esc(data.message)}</div>`);
        }

        loadSidebar();
    </script>
</body>
</html>
"#;
