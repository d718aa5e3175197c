// src/views/components.rs
//
// Static marketing sections for the landing page. Pure presentation;
// nothing here touches application state.

pub const NAVBAR: &str = r##"<nav class="navbar">
  <a href="/" class="brand">QCaaS</a>
  <div class="nav-links">
    <a href="/#learn-more">Learn More</a>
    <a href="/experiment" class="nav-cta">Get Started</a>
  </div>
</nav>
"##;

pub const HERO: &str = r##"<section class="hero">
  <p class="badge">Quantum Machine Learning, Demystified</p>
  <h1>
    <span class="hero-pre">Welcome to</span><br>
    <span class="hero-brand">QCaaS</span><br>
    <span class="hero-sub">Quantum-Enhanced Classification as a Service</span>
  </h1>
  <p class="hero-lede">
    Benchmark a state-of-the-art quantum classifier against a classical standard
    with a single click. No quantum physics degree required
  </p>
  <div class="hero-actions">
    <a href="/experiment" class="btn btn-primary">Launch Experiment</a>
    <a href="/#learn-more" class="btn btn-primary">Learn More</a>
  </div>
</section>
"##;

pub const PROBLEM: &str = r##"<section class="problem">
  <p class="badge">The Challenge</p>
  <h2>The Quantum Wall</h2>
  <p>
    Quantum Machine Learning (QML) holds immense potential to revolutionize
    data science and artificial intelligence. However, there's a significant
    barrier preventing widespread adoption and experimentation.
  </p>
  <p>
    Despite its transformative power, QML remains locked behind a wall of
    complexity. Steep learning curves, limited access to quantum hardware, and
    complicated programming frameworks make it nearly impossible for
    researchers, students, and developers to gain hands-on experience.
  </p>
  <p>
    This accessibility gap stifles innovation, limits educational
    opportunities, and prevents the quantum computing community from growing
    at the pace it deserves.
  </p>
  <ul class="pain-points">
    <li><strong>High Barrier to Entry:</strong> Complex setup and steep learning curve discourage experimentation</li>
    <li><strong>Limited Access:</strong> Quantum hardware and advanced frameworks remain out of reach for most</li>
    <li><strong>No Hands-On Learning:</strong> Theoretical knowledge without practical application limits skill development</li>
  </ul>
</section>
"##;

pub const SOLUTION: &str = r##"<section class="solution">
  <p class="badge">The Solution</p>
  <h2>Your Personal Quantum Sandbox</h2>
  <p class="section-lede">
    Experience the power of quantum machine learning without the complexity.
    Our platform handles everything in three simple steps.
  </p>
  <div class="steps">
    <div class="step-card">
      <span class="step-number">01</span>
      <h3>1. Select Benchmark</h3>
      <p>Choose from a pre-loaded library of standard academic datasets.</p>
      <ul>
        <li>Controlled experiment</li>
        <li>Standard benchmark data</li>
        <li>No complex setup</li>
      </ul>
    </div>
    <div class="step-card">
      <span class="step-number">02</span>
      <h3>2. Run Comparison</h3>
      <p>With one click, our platform trains both a quantum VQC and a classical
      SVM on the exact same data for a fair, head-to-head test.</p>
      <ul>
        <li>One-click execution</li>
        <li>Fair VQC vs. SVM test</li>
        <li>Automated processing</li>
      </ul>
    </div>
    <div class="step-card">
      <span class="step-number">03</span>
      <h3>3. Analyze Results</h3>
      <p>View the performance on a clear, visual dashboard. See the
      side-by-side metrics to gain real, data-driven insights.</p>
      <ul>
        <li>Clear results dashboard</li>
        <li>Key performance metrics</li>
        <li>Visual comparisons</li>
      </ul>
    </div>
  </div>
</section>
"##;

pub const TECH_STACK: &str = r##"<section class="tech-stack">
  <h2>Powered by Cutting-Edge Technology</h2>
  <p class="section-lede">
    Built with the most advanced tools in web development and quantum computing
  </p>
  <ul class="tech-logos">
    <li>Qiskit</li>
    <li>Python</li>
    <li>Scikit-learn</li>
    <li>Rust</li>
    <li>Actix Web</li>
  </ul>
</section>
"##;

pub const LEARN_MORE: &str = r##"<section class="learn-more" id="learn-more">
  <p class="badge">Core Technologies</p>
  <h2>A Glimpse Under the Hood</h2>
  <p class="section-lede">
    A brief introduction to the core technologies that make this project possible.
  </p>
  <div class="explainers">
    <article class="explainer">
      <h3>What is Quantum Computing?</h3>
      <p>
        Quantum computing leverages quantum mechanics to tackle problems beyond
        classical computers. Unlike a classical bit (0 or 1), a qubit can exist
        in multiple states simultaneously. This allows quantum computers to
        solve complex tasks, like molecular modeling, system optimization, or
        high-dimensional data analysis, potentially in minutes instead of
        millennia.
      </p>
      <a href="https://www.ibm.com/think/topics/quantum-computing" target="_blank" rel="noopener noreferrer">IBM's "What is Quantum Computing?"</a>
    </article>
    <article class="explainer">
      <h3>What is Quantum Machine Learning?</h3>
      <p>
        Quantum Machine Learning (QML) combines quantum data with hybrid
        quantum-classical models. While classical ML finds patterns in standard
        data, QML leverages quantum properties to uncover patterns in complex,
        high-dimensional data. Variational Quantum Classifiers (VQC) use
        quantum circuits to process data and classical optimizers to train the
        model, merging quantum speed with classical efficiency.
      </p>
      <a href="https://www.tensorflow.org/quantum/concepts" target="_blank" rel="noopener noreferrer">TensorFlow's Quantum Machine Learning Concepts</a>
    </article>
    <article class="explainer">
      <h3>What is Qiskit?</h3>
      <p>
        Qiskit is a leading open-source quantum computing framework, used by
        7,000+ researchers worldwide. Qiskit lets us build, test, and run
        quantum circuits. The platform uses Qiskit's Aer simulator to run the
        VQC model locally, without real quantum hardware, while remaining
        compatible with multiple quantum platforms like IBM, Amazon, and
        Microsoft.
      </p>
      <a href="https://www.ibm.com/quantum/qiskit" target="_blank" rel="noopener noreferrer">The Official Qiskit Homepage</a>
    </article>
  </div>
  <div class="why-matters">
    <h3>Why This Matters</h3>
    <p>
      By combining these powerful technologies, QCaaS makes quantum machine
      learning accessible to everyone. No PhD required. Experience the future
      of AI, today.
    </p>
    <a href="/experiment" class="btn btn-light">Start Your First Experiment</a>
  </div>
</section>
"##;

pub const FOOTER: &str = r##"<footer class="footer">
  <p>© 2025 QCaaS. All Rights Reserved.</p>
</footer>
"##;
